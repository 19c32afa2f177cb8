//! ECS components for hecs entities.
//!
//! An entity is a [`Transform`](crate::types::Transform), an [`EntityMarker`]
//! and a [`Lifecycle`] plus whichever capability components its kind needs.
//! Behavior lives in the sim systems.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::{BEHIND_CAMERA_Z, PLANE_HALF};
use crate::cooldown::Cooldown;
use crate::enums::{EntityKind, GlowState, MeshId};

/// Kind tag used for collision dispatch, restart and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMarker {
    pub kind: EntityKind,
}

/// Liveness flag. Cleared exactly once, by the first kill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifecycle {
    pub alive: bool,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self { alive: true }
    }
}

impl Lifecycle {
    /// Returns `true` only for the call that actually killed the entity.
    pub fn kill(&mut self) -> bool {
        std::mem::replace(&mut self.alive, false)
    }
}

/// Linear velocity (per nominal frame) and Euler spin (per frame).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub velocity: Vec3,
    pub spin: Vec3,
}

impl Motion {
    pub fn linear(velocity: Vec3) -> Self {
        Self {
            velocity,
            spin: Vec3::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub life: i32,
    pub max_life: i32,
}

impl Health {
    pub fn full(max_life: i32) -> Self {
        Self {
            life: max_life,
            max_life,
        }
    }

    pub fn is_depleted(&self) -> bool {
        self.life <= 0
    }
}

/// Damage dealt to the other party on contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDamage {
    pub damage: i32,
}

/// Post-hit flash. The cooldown percent drives the visual and, when
/// `invincible_during_glow` is set, gates further damage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Glow {
    pub cooldown: Cooldown,
    pub invincible_during_glow: bool,
}

impl Glow {
    /// Flash of `duration` ms that is already over at spawn.
    pub fn expired(duration: f64, invincible_during_glow: bool) -> Self {
        Self {
            cooldown: Cooldown::with_initial(duration, duration),
            invincible_during_glow,
        }
    }

    pub fn is_glowing(&self) -> bool {
        self.cooldown.percent(true) < 1.0
    }

    /// Emissive strength for the renderer: 1.0 right after a hit, 0.0 at rest.
    pub fn intensity(&self) -> f32 {
        (1.0 - self.cooldown.percent(true)) as f32
    }

    /// Damage is swallowed while an invincible flash is running.
    pub fn shields_damage(&self) -> bool {
        self.invincible_during_glow && !self.cooldown.can_trigger()
    }
}

/// Derive the damage feedback state from health and glow.
pub fn glow_state(health: &Health, glow: &Glow) -> GlowState {
    if health.is_depleted() {
        GlowState::Dead
    } else if glow.is_glowing() {
        GlowState::Glowing
    } else {
        GlowState::Normal
    }
}

/// Sphere registered in the collision world. Detection only: the collision
/// world never moves a body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionBody {
    pub mesh: MeshId,
    pub radius: f32,
    pub mass: f32,
    pub collision_response: bool,
    /// Mirrored from the entity transform once per frame.
    pub position: Vec3,
    pub orientation: Quat,
}

impl CollisionBody {
    pub fn sphere(mesh: MeshId, radius: f32) -> Self {
        Self {
            mesh,
            radius,
            mass: 1.0,
            collision_response: false,
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }
}

/// Frame-counted lifespan; the node shrinks linearly to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lifetime {
    pub remaining: u32,
    pub max: u32,
    pub max_scale: f32,
}

impl Lifetime {
    pub fn frames(max: u32, max_scale: f32) -> Self {
        Self {
            remaining: max,
            max,
            max_scale,
        }
    }

    pub fn scale(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        self.remaining as f32 / self.max as f32 * self.max_scale
    }
}

/// Star scale oscillation phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Twinkle {
    pub phase: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Meteor {
    pub size: f32,
}

/// Player ship steering, weapons, reactor and shield state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipState {
    /// Steering velocity, recomputed every frame from the pointer.
    pub velocity: Vec3,
    pub fire: Cooldown,
    pub reactor: Cooldown,
    pub barrier_active: bool,
    pub barrier_opacity: f32,
}

/// Scrolling floor plus the spawners that live on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneState {
    pub meteor_spawner: Cooldown,
    pub star_spawner: Cooldown,
}

/// Which out-of-bounds rule removes the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bounds {
    /// Any axis at or beyond the half-extent.
    Cube,
    /// X/Y beyond the half-extent, or drifted behind the camera.
    Field,
}

impl Bounds {
    pub fn contains(self, position: Vec3) -> bool {
        let inside_xy = position.x.abs() < PLANE_HALF && position.y.abs() < PLANE_HALF;
        match self {
            Bounds::Cube => inside_xy && position.z.abs() < PLANE_HALF,
            Bounds::Field => inside_xy && position.z < BEHIND_CAMERA_Z,
        }
    }
}
