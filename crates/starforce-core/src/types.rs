//! Fundamental geometric and frame-timing types.

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::SIXTY_FPS_MS;

/// Position, orientation (XYZ Euler angles, radians) and scale of a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = Vec3::splat(scale);
    }

    /// Orientation as a quaternion, for the collision world.
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }
}

/// Timing of the frame being simulated, handed to every update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameInfo {
    /// Milliseconds since the previous frame.
    pub delta: f64,
    /// `delta` normalized against the 60 fps budget.
    pub speed: f64,
    /// Seconds of simulated (unpaused) time.
    pub elapsed: f64,
}

impl FrameInfo {
    /// Build the frame info for a raw delta. A non-positive delta counts as
    /// one nominal frame.
    pub fn from_delta(delta: f64, elapsed: f64) -> Self {
        let budget = if delta > 0.0 { delta } else { SIXTY_FPS_MS };
        Self {
            delta,
            speed: budget / SIXTY_FPS_MS,
            elapsed,
        }
    }

    pub fn speed_f32(&self) -> f32 {
        self.speed as f32
    }

    /// How far this frame's speed strays from a nominal frame.
    pub fn speed_deviation(&self) -> f64 {
        1.0 - self.speed
    }
}

// --- Scalar helpers ---

pub fn lerp(x: f32, y: f32, a: f32) -> f32 {
    x * (1.0 - a) + y * a
}

/// Inverse of [`lerp`], clamped to [0, 1].
pub fn invlerp(x: f32, y: f32, a: f32) -> f32 {
    ((a - x) / (y - x)).clamp(0.0, 1.0)
}

/// Map `a` from `[x1, y1]` onto `[x2, y2]`.
pub fn range(x1: f32, y1: f32, x2: f32, y2: f32, a: f32) -> f32 {
    lerp(x2, y2, invlerp(x1, y1, a))
}
