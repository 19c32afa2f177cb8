//! Frame-counted lifespans (scrap, reactor trail) and star twinkle.

use hecs::{Entity, World};

use starforce_core::components::{Lifecycle, Lifetime, Twinkle};
use starforce_core::constants::{STAR_MAX_SCALE, STAR_MIN_SCALE};
use starforce_core::types::{range, FrameInfo, Transform};

use crate::queue::EntityQueue;
use crate::systems::damage;

/// Count every lifespan down by one frame and shrink the node with it.
pub fn run(world: &mut World, queue: &mut EntityQueue, expired: &mut Vec<Entity>) {
    expired.clear();

    for (entity, (lifecycle, transform, lifetime)) in
        world.query_mut::<(&Lifecycle, &mut Transform, &mut Lifetime)>()
    {
        if !lifecycle.alive {
            continue;
        }
        lifetime.remaining = lifetime.remaining.saturating_sub(1);
        transform.set_uniform_scale(lifetime.scale());
        if lifetime.remaining == 0 {
            expired.push(entity);
        }
    }

    for entity in expired.drain(..) {
        damage::kill(world, queue, entity);
    }
}

pub fn twinkle(world: &mut World, frame: &FrameInfo) {
    for (_entity, (lifecycle, transform, twinkle)) in
        world.query_mut::<(&Lifecycle, &mut Transform, &Twinkle)>()
    {
        if !lifecycle.alive {
            continue;
        }
        let wave = (frame.elapsed as f32 + twinkle.phase).sin();
        transform.set_uniform_scale(range(-1.0, 1.0, STAR_MIN_SCALE, STAR_MAX_SCALE, wave));
    }
}
