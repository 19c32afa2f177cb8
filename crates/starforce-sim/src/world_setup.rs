//! Entity spawn factories.
//!
//! Every factory builds a component bundle and pushes it onto the
//! [`EntityQueue`]; nothing becomes live before the next commit.

use std::f32::consts::TAU;

use glam::Vec3;
use hecs::EntityBuilder;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starforce_core::components::*;
use starforce_core::config::EngineConfig;
use starforce_core::constants::*;
use starforce_core::cooldown::Cooldown;
use starforce_core::enums::{EntityKind, MeshId};
use starforce_core::types::Transform;

use crate::assets::AssetRegistry;
use crate::queue::EntityQueue;

/// Components every entity carries.
fn base(kind: EntityKind, transform: Transform) -> EntityBuilder {
    let mut builder = EntityBuilder::new();
    builder.add(EntityMarker { kind });
    builder.add(Lifecycle::default());
    builder.add(transform);
    builder
}

fn collision_body(assets: &AssetRegistry, mesh: MeshId, scale: f32) -> CollisionBody {
    CollisionBody::sphere(mesh, assets.scaled_radius(mesh, scale))
}

/// Uniform sample in `[-range, range)`.
fn symmetric(rng: &mut ChaCha8Rng, range: f32) -> f32 {
    rng.gen::<f32>() * 2.0 * range - range
}

fn random_rotation(rng: &mut ChaCha8Rng) -> Vec3 {
    Vec3::new(rng.gen::<f32>() * TAU, rng.gen::<f32>() * TAU, rng.gen::<f32>() * TAU)
}

/// The scrolling floor. Also carries the meteor and star spawners.
pub fn spawn_plane(queue: &mut EntityQueue, config: &EngineConfig) {
    let mut builder = base(EntityKind::Plane, Transform::default());
    builder.add(PlaneState {
        meteor_spawner: Cooldown::wrapping(config.meteor_spawn_ms),
        star_spawner: Cooldown::wrapping(config.star_spawn_ms),
    });
    queue.spawn(builder);
}

/// The player ship at the origin, full life, glow already expired.
pub fn spawn_ship(queue: &mut EntityQueue, assets: &AssetRegistry, config: &EngineConfig) {
    let mut builder = base(
        EntityKind::Ship,
        Transform::default().with_uniform_scale(SHIP_SCALE),
    );
    builder
        .add(Health::full(SHIP_MAX_LIFE))
        .add(ContactDamage {
            damage: SHIP_CONTACT_DAMAGE,
        })
        .add(Glow::expired(config.ship_glow_ms, true))
        .add(ShipState {
            velocity: Vec3::ZERO,
            fire: Cooldown::new(config.fire_cooldown_ms),
            reactor: Cooldown::new(config.reactor_cooldown_ms),
            barrier_active: false,
            barrier_opacity: 0.0,
        })
        .add(collision_body(assets, MeshId::Ship, SHIP_SCALE));
    queue.spawn(builder);
}

/// One bullet of a twin shot. `side` is -1.0 (left) or 1.0 (right).
pub fn spawn_bullet(queue: &mut EntityQueue, assets: &AssetRegistry, ship_position: Vec3, side: f32) {
    let muzzle = Vec3::new(side * BULLET_MUZZLE_X, 0.0, BULLET_MUZZLE_Z) * SHIP_SCALE;
    let mut builder = base(EntityKind::Bullet, Transform::at(ship_position + muzzle));
    builder
        .add(Motion::linear(Vec3::new(
            side * BULLET_SPREAD,
            0.0,
            BULLET_FORWARD_SPEED,
        )))
        .add(ContactDamage {
            damage: BULLET_DAMAGE,
        })
        .add(Bounds::Cube)
        .add(collision_body(assets, MeshId::Bullet, 1.0));
    queue.spawn(builder);
}

/// Exhaust puff behind the ship.
pub fn spawn_reactor_trail(queue: &mut EntityQueue, ship_position: Vec3, engine_speed: f32) {
    let offset = Vec3::new(0.0, 0.0, REACTOR_TRAIL_OFFSET_Z) * SHIP_SCALE;
    let mut builder = base(EntityKind::ReactorTrail, Transform::at(ship_position + offset));
    builder
        .add(Motion::linear(Vec3::new(
            0.0,
            0.0,
            REACTOR_TRAIL_SPEED * engine_speed * REACTOR_TRAIL_SPEED_FACTOR,
        )))
        .add(Lifetime::frames(REACTOR_TRAIL_LIFE, 1.0));
    queue.spawn(builder);
}

/// Debris burst for a destroyed ship or meteor.
pub fn spawn_scrap_burst(queue: &mut EntityQueue, rng: &mut ChaCha8Rng, position: Vec3) {
    for _ in 0..SCRAP_COUNT {
        let velocity = Vec3::new(
            symmetric(rng, SCRAP_VELOCITY_RANGE),
            symmetric(rng, SCRAP_VELOCITY_RANGE),
            symmetric(rng, SCRAP_VELOCITY_RANGE),
        );
        let rotation = random_rotation(rng);
        let spin = Vec3::new(
            symmetric(rng, SCRAP_SPIN_RANGE),
            symmetric(rng, SCRAP_SPIN_RANGE),
            symmetric(rng, SCRAP_SPIN_RANGE),
        );

        let transform = Transform::at(position)
            .with_rotation(rotation)
            .with_uniform_scale(SCRAP_MAX_SCALE);
        let mut builder = base(EntityKind::Scrap, transform);
        builder
            .add(Motion { velocity, spin })
            .add(Lifetime::frames(SCRAP_LIFE, SCRAP_MAX_SCALE));
        queue.spawn(builder);
    }
}

/// A meteor somewhere on the segment between the two spawn-area corners.
pub fn spawn_meteor(
    queue: &mut EntityQueue,
    rng: &mut ChaCha8Rng,
    assets: &AssetRegistry,
    config: &EngineConfig,
    left: Vec3,
    right: Vec3,
) {
    let size = config.meteor_size.at(rng.gen());
    let position = left.lerp(right, rng.gen());
    let velocity = Vec3::new(
        config.meteor_drift.at(rng.gen()),
        config.meteor_drift.at(rng.gen()),
        config.meteor_speed.at(rng.gen()),
    );
    let spin = Vec3::new(
        config.meteor_spin.at(rng.gen()),
        config.meteor_spin.at(rng.gen()),
        config.meteor_spin.at(rng.gen()),
    );
    let rotation = random_rotation(rng);

    insert_meteor(
        queue,
        assets,
        config,
        Transform::at(position).with_rotation(rotation),
        size,
        Motion { velocity, spin },
    );
}

/// Meteor with explicit placement and motion.
pub fn insert_meteor(
    queue: &mut EntityQueue,
    assets: &AssetRegistry,
    config: &EngineConfig,
    transform: Transform,
    size: f32,
    motion: Motion,
) {
    let max_life = (size / METEOR_LIFE_DIVISOR).ceil() as i32;
    let damage = (size / METEOR_DAMAGE_DIVISOR).ceil() as i32;

    let mut builder = base(EntityKind::Meteor, transform.with_uniform_scale(size));
    builder
        .add(Meteor { size })
        .add(motion)
        .add(Health::full(max_life))
        .add(ContactDamage { damage })
        .add(Glow::expired(config.meteor_glow_ms, false))
        .add(Bounds::Field)
        .add(collision_body(assets, MeshId::Meteor, size));
    queue.spawn(builder);
}

/// A background star below the plane. `initial` stars are scattered over
/// the whole depth; later ones appear far ahead.
pub fn spawn_star(queue: &mut EntityQueue, rng: &mut ChaCha8Rng, initial: bool) {
    let x = rng.gen::<f32>() * PLANE_SIZE - PLANE_HALF;
    let y = -rng.gen::<f32>() * (PLANE_HALF - STAR_Y_OFFSET) - STAR_Y_OFFSET;
    let z = if initial {
        rng.gen::<f32>() * PLANE_SIZE - PLANE_HALF
    } else {
        -rng.gen::<f32>() * PLANE_SIZE
    };
    let rotation = random_rotation(rng);
    let spin = Vec3::new(
        symmetric(rng, STAR_SPIN_RANGE),
        symmetric(rng, STAR_SPIN_RANGE),
        symmetric(rng, STAR_SPIN_RANGE),
    );
    let phase = rng.gen::<f32>() * TAU;

    let transform = Transform::at(Vec3::new(x, y, z))
        .with_rotation(rotation)
        .with_uniform_scale(0.0);
    let mut builder = base(EntityKind::Star, transform);
    builder
        .add(Motion {
            velocity: Vec3::new(0.0, 0.0, STAR_DEPTH_SPEED / y.abs()),
            spin,
        })
        .add(Twinkle { phase })
        .add(Bounds::Field);
    queue.spawn(builder);
}

pub fn spawn_star_field(queue: &mut EntityQueue, rng: &mut ChaCha8Rng, count: u32) {
    for _ in 0..count {
        spawn_star(queue, rng, true);
    }
}
