//! Engine tuning loaded from JSON.
//!
//! Every field has a default, so `{}` is a valid config and a partial file
//! only overrides what it names.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Inclusive-exclusive `[min, max)` sampling range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpanF32 {
    pub min: f32,
    pub max: f32,
}

impl SpanF32 {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Map a unit sample `t` in `[0, 1)` onto the span.
    pub fn at(&self, t: f32) -> f32 {
        self.min + (self.max - self.min) * t
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ConfigError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the engine's single RNG.
    pub seed: u64,
    /// Global scroll multiplier applied to the plane and reactor trail.
    pub engine_speed: f32,

    // --- Ship ---
    pub fire_cooldown_ms: f64,
    pub reactor_cooldown_ms: f64,
    pub ship_glow_ms: f64,

    // --- Meteors ---
    /// Interval between meteor spawns once the game has started.
    pub meteor_spawn_ms: f64,
    pub meteor_glow_ms: f64,
    pub meteor_size: SpanF32,
    /// Forward (+z) speed per nominal frame.
    pub meteor_speed: SpanF32,
    /// Lateral drift per nominal frame, applied to x and y.
    pub meteor_drift: SpanF32,
    /// Euler spin per frame, applied to each axis.
    pub meteor_spin: SpanF32,

    // --- Stars ---
    pub initial_stars: u32,
    pub star_spawn_ms: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            engine_speed: 1.0,
            fire_cooldown_ms: 100.0,
            reactor_cooldown_ms: 80.0,
            ship_glow_ms: 1000.0,
            meteor_spawn_ms: 800.0,
            meteor_glow_ms: 200.0,
            meteor_size: SpanF32::new(20.0, 60.0),
            meteor_speed: SpanF32::new(15.0, 30.0),
            meteor_drift: SpanF32::new(-2.0, 2.0),
            meteor_spin: SpanF32::new(-0.02, 0.02),
            initial_stars: 200,
            star_spawn_ms: 50.0,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("fire_cooldown_ms", self.fire_cooldown_ms),
            ("reactor_cooldown_ms", self.reactor_cooldown_ms),
            ("ship_glow_ms", self.ship_glow_ms),
            ("meteor_spawn_ms", self.meteor_spawn_ms),
            ("meteor_glow_ms", self.meteor_glow_ms),
            ("star_spawn_ms", self.star_spawn_ms),
        ];
        for (field, value) in durations {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDuration { field, value });
            }
        }

        if !self.engine_speed.is_finite() || self.engine_speed < 0.0 {
            return Err(ConfigError::InvalidRange {
                field: "engine_speed",
                min: self.engine_speed,
                max: self.engine_speed,
            });
        }

        self.meteor_size.validate("meteor_size")?;
        self.meteor_speed.validate("meteor_speed")?;
        self.meteor_drift.validate("meteor_drift")?;
        self.meteor_spin.validate("meteor_spin")?;

        if self.meteor_size.min < 1.0 {
            return Err(ConfigError::InvalidRange {
                field: "meteor_size",
                min: self.meteor_size.min,
                max: self.meteor_size.max,
            });
        }
        Ok(())
    }
}
