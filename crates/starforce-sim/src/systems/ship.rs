//! Player ship: pointer steering, barrier, twin guns and reactor exhaust.

use glam::Vec3;
use hecs::World;

use starforce_core::components::{Lifecycle, ShipState};
use starforce_core::constants::*;
use starforce_core::controls::Controls;
use starforce_core::enums::MouseButton;
use starforce_core::events::{Sound, SoundRequest};
use starforce_core::types::{FrameInfo, Transform};

use crate::assets::AssetRegistry;
use crate::queue::EntityQueue;
use crate::world_setup;

pub fn run(
    world: &mut World,
    controls: &Controls,
    frame: &FrameInfo,
    engine_speed: f32,
    assets: &AssetRegistry,
    queue: &mut EntityQueue,
    sounds: &mut Vec<SoundRequest>,
) {
    let fire_held = controls.is_mouse_pressed(MouseButton::Left);
    let barrier_held = controls.is_mouse_pressed(MouseButton::Right);

    for (_entity, (lifecycle, transform, ship)) in
        world.query_mut::<(&Lifecycle, &mut Transform, &mut ShipState)>()
    {
        if !lifecycle.alive {
            continue;
        }

        steer(transform, ship, controls.pointer_target(), frame.speed_f32());
        update_barrier(ship, barrier_held, sounds);

        ship.fire.tick(frame.delta);
        if fire_held {
            if ship.fire.can_trigger() {
                ship.fire.trigger();
                sounds.push(SoundRequest::play(Sound::Laser));
                for side in [-1.0, 1.0] {
                    world_setup::spawn_bullet(queue, assets, transform.position, side);
                }
            }
        } else {
            ship.fire.reset();
        }

        ship.reactor.tick(frame.delta);
        if ship.reactor.can_trigger() {
            ship.reactor.trigger();
            world_setup::spawn_reactor_trail(queue, transform.position, engine_speed);
        } else {
            ship.reactor.reset();
        }
    }
}

/// Chase the pointer target, banking with lateral speed. Without a target
/// the ship coasts to a stop.
fn steer(transform: &mut Transform, ship: &mut ShipState, target: Option<Vec3>, speed: f32) {
    match target {
        Some(target) => {
            let offset = transform.position - target;
            let distance = offset.length();
            ship.velocity = if distance > f32::EPSILON {
                -offset / distance * distance * SHIP_STEER_FACTOR
            } else {
                Vec3::ZERO
            };

            transform.rotation.z =
                (-ship.velocity.x * SHIP_BANK_FACTOR).clamp(-SHIP_MAX_BANK, SHIP_MAX_BANK);
            transform.position = transform
                .position
                .clamp(Vec3::splat(-PLANE_QUARTER), Vec3::splat(PLANE_QUARTER));
        }
        None => ship.velocity *= SHIP_VELOCITY_DECAY,
    }
    transform.position += ship.velocity * speed;
}

fn update_barrier(ship: &mut ShipState, held: bool, sounds: &mut Vec<SoundRequest>) {
    if held && !ship.barrier_active {
        sounds.push(SoundRequest::play(Sound::Shield));
    } else if !held && ship.barrier_active {
        sounds.push(SoundRequest::stop(Sound::Shield));
    }
    ship.barrier_active = held;

    ship.barrier_opacity = if held {
        (ship.barrier_opacity + BARRIER_FADE_IN).min(BARRIER_MAX_OPACITY)
    } else {
        ship.barrier_opacity * BARRIER_FADE_OUT
    };
}

#[cfg(test)]
mod tests {
    use starforce_core::cooldown::Cooldown;

    use super::*;

    fn ship_state() -> ShipState {
        ShipState {
            velocity: Vec3::ZERO,
            fire: Cooldown::new(100.0),
            reactor: Cooldown::new(80.0),
            barrier_active: false,
            barrier_opacity: 0.0,
        }
    }

    #[test]
    fn steering_moves_a_fifth_of_the_way() {
        let mut transform = Transform::default();
        let mut ship = ship_state();
        steer(&mut transform, &mut ship, Some(Vec3::new(100.0, 0.0, 0.0)), 1.0);
        assert!((transform.position.x - 20.0).abs() < 1e-4);
        // Moving right banks left.
        assert!(transform.rotation.z < 0.0);
        assert!(transform.rotation.z >= -SHIP_MAX_BANK);
    }

    #[test]
    fn bank_is_clamped() {
        let mut transform = Transform::default();
        let mut ship = ship_state();
        steer(&mut transform, &mut ship, Some(Vec3::new(-5000.0, 0.0, 0.0)), 1.0);
        assert!((transform.rotation.z - SHIP_MAX_BANK).abs() < 1e-6);
    }

    #[test]
    fn coasting_decays_velocity() {
        let mut transform = Transform::default();
        let mut ship = ship_state();
        ship.velocity = Vec3::new(10.0, 0.0, 0.0);
        steer(&mut transform, &mut ship, None, 1.0);
        assert!((ship.velocity.x - 2.0).abs() < 1e-6);
        assert!((transform.position.x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn barrier_fades_and_sounds_on_edges() {
        let mut ship = ship_state();
        let mut sounds = Vec::new();
        for _ in 0..10 {
            update_barrier(&mut ship, true, &mut sounds);
        }
        assert_eq!(sounds, vec![SoundRequest::play(Sound::Shield)]);
        assert!((ship.barrier_opacity - BARRIER_MAX_OPACITY).abs() < 1e-6);

        update_barrier(&mut ship, false, &mut sounds);
        assert_eq!(sounds.last(), Some(&SoundRequest::stop(Sound::Shield)));
        assert!((ship.barrier_opacity - BARRIER_MAX_OPACITY * BARRIER_FADE_OUT).abs() < 1e-6);
        assert!(!ship.barrier_active);
    }
}
