//! Damage resolution and death side effects.

use glam::Vec3;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use starforce_core::components::{EntityMarker, Glow, Health, Lifecycle, ShipState};
use starforce_core::constants::GAMEOVER_SOUND_DELAY_MS;
use starforce_core::enums::EntityKind;
use starforce_core::events::{EngineEvent, Sound, SoundRequest};
use starforce_core::types::Transform;

use crate::queue::EntityQueue;
use crate::score::ScoreState;
use crate::world_setup;

/// Everything a hit may touch besides the world itself.
pub struct DamageContext<'a> {
    pub queue: &'a mut EntityQueue,
    pub rng: &'a mut ChaCha8Rng,
    pub sounds: &'a mut Vec<SoundRequest>,
    pub events: &'a mut Vec<EngineEvent>,
    pub score: &'a mut ScoreState,
    /// Engine time (seconds), for the score.
    pub now: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageOutcome {
    /// Dead, gone, or has no health.
    Ignored,
    /// Absorbed by the ship's barrier.
    Tanked,
    /// Absorbed by an invincible glow.
    Shielded,
    /// Life lost; the glow flash restarted.
    Hurt,
    Killed,
}

/// Mark an entity dead and queue its removal. Returns `false` if it was
/// already dead or does not exist.
pub fn kill(world: &mut World, queue: &mut EntityQueue, entity: Entity) -> bool {
    let Ok(mut lifecycle) = world.get::<&mut Lifecycle>(entity) else {
        return false;
    };
    if lifecycle.kill() {
        queue.despawn(entity);
        true
    } else {
        false
    }
}

pub fn is_alive(world: &World, entity: Entity) -> bool {
    world
        .get::<&Lifecycle>(entity)
        .map(|lifecycle| lifecycle.alive)
        .unwrap_or(false)
}

/// Apply `damage` to `entity`.
pub fn take_damage(
    world: &mut World,
    entity: Entity,
    damage: i32,
    ctx: &mut DamageContext,
) -> DamageOutcome {
    let (kind, position, outcome) = {
        let Ok((marker, lifecycle, transform, health, glow, ship)) = world
            .query_one_mut::<(
                &EntityMarker,
                &Lifecycle,
                &Transform,
                &mut Health,
                Option<&mut Glow>,
                Option<&ShipState>,
            )>(entity)
        else {
            return DamageOutcome::Ignored;
        };

        if !lifecycle.alive {
            return DamageOutcome::Ignored;
        }

        let outcome = if ship.is_some_and(|ship| ship.barrier_active) {
            log::debug!("damage tanked: {damage}");
            DamageOutcome::Tanked
        } else if glow.as_ref().is_some_and(|glow| glow.shields_damage()) {
            DamageOutcome::Shielded
        } else {
            health.life -= damage;
            if health.is_depleted() {
                DamageOutcome::Killed
            } else {
                if let Some(glow) = glow {
                    glow.cooldown.trigger();
                }
                DamageOutcome::Hurt
            }
        };
        (marker.kind, transform.position, outcome)
    };

    if outcome == DamageOutcome::Killed {
        die(world, entity, kind, position, ctx);
    }
    outcome
}

fn die(world: &mut World, entity: Entity, kind: EntityKind, position: Vec3, ctx: &mut DamageContext) {
    if !kill(world, ctx.queue, entity) {
        return;
    }
    world_setup::spawn_scrap_burst(ctx.queue, ctx.rng, position);

    match kind {
        EntityKind::Ship => {
            log::info!("Ship destroyed at {position}");
            ctx.events.push(EngineEvent::Death);
            ctx.sounds
                .push(SoundRequest::play_delayed(Sound::GameOver, GAMEOVER_SOUND_DELAY_MS));
            ctx.score.record_death(ctx.now);
        }
        EntityKind::Meteor => {
            ctx.sounds.push(SoundRequest::play(Sound::Explosion));
            ctx.score.record_meteor();
        }
        _ => {}
    }
}
