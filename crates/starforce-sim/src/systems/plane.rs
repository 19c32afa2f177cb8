//! Plane scroll and the spawners it carries (meteor waves, stars).

use glam::Vec3;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use starforce_core::components::{Lifecycle, PlaneState};
use starforce_core::config::EngineConfig;
use starforce_core::constants::{PLANE_SCROLL_SPEED, PLANE_STEP};
use starforce_core::types::{FrameInfo, Transform};

use crate::assets::AssetRegistry;
use crate::queue::EntityQueue;
use crate::world_setup;

/// Far corners of the visible play area, supplied by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnArea {
    pub left: Option<Vec3>,
    pub right: Option<Vec3>,
}

impl SpawnArea {
    pub fn corners(&self) -> Option<(Vec3, Vec3)> {
        Some((self.left?, self.right?))
    }
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    frame: &FrameInfo,
    config: &EngineConfig,
    has_game_started: bool,
    spawn_area: SpawnArea,
    assets: &AssetRegistry,
    rng: &mut ChaCha8Rng,
    queue: &mut EntityQueue,
) {
    let mut meteors = 0u32;
    let mut stars = 0u32;

    for (_entity, (lifecycle, transform, plane)) in
        world.query_mut::<(&Lifecycle, &mut Transform, &mut PlaneState)>()
    {
        if !lifecycle.alive {
            continue;
        }
        transform.position.z = (transform.position.z
            + PLANE_SCROLL_SPEED * frame.speed_f32() * config.engine_speed)
            % PLANE_STEP;

        if plane.star_spawner.tick(frame.delta) {
            stars += 1;
        }
        if has_game_started && plane.meteor_spawner.tick(frame.delta) {
            meteors += 1;
        }
    }

    for _ in 0..stars {
        world_setup::spawn_star(queue, rng, false);
    }

    if meteors == 0 {
        return;
    }
    match spawn_area.corners() {
        Some((left, right)) => {
            for _ in 0..meteors {
                world_setup::spawn_meteor(queue, rng, assets, config, left, right);
            }
        }
        None => log::debug!("Spawn area incomplete, skipping meteor spawn"),
    }
}
