//! Cooldown timer gating repeatable actions (firing, spawning, glow).
//!
//! Two policies coexist because call sites want different behavior:
//!
//! - [`CooldownPolicy::Saturating`]: `tick` only accumulates. The action is
//!   allowed once the accumulator reaches the threshold and stays allowed
//!   until [`Cooldown::trigger`].
//! - [`CooldownPolicy::Wrapping`]: `tick` reports whether the threshold was
//!   crossed and carries the remainder over, so a steady spawner does not
//!   drift with the frame rate.

use serde::{Deserialize, Serialize};

use crate::enums::CooldownPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cooldown {
    threshold: f64,
    accumulated: f64,
    policy: CooldownPolicy,
}

impl Cooldown {
    /// Saturating cooldown that starts from zero.
    pub fn new(threshold: f64) -> Self {
        Self::with_initial(threshold, 0.0)
    }

    /// Saturating cooldown with a pre-filled accumulator. Passing the
    /// threshold makes the timer ready (and not glowing) from the start.
    pub fn with_initial(threshold: f64, initial: f64) -> Self {
        Self {
            threshold: threshold.max(0.0),
            accumulated: initial.max(0.0),
            policy: CooldownPolicy::Saturating,
        }
    }

    /// Wrapping cooldown that starts from zero.
    pub fn wrapping(threshold: f64) -> Self {
        Self {
            policy: CooldownPolicy::Wrapping,
            ..Self::new(threshold)
        }
    }

    pub fn policy(&self) -> CooldownPolicy {
        self.policy
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Accumulate `delta` milliseconds.
    ///
    /// Under the wrapping policy, returns `true` when the threshold was
    /// exceeded; one threshold is subtracted per call. Saturating timers
    /// always return `false` here, use [`Cooldown::can_trigger`].
    pub fn tick(&mut self, delta: f64) -> bool {
        if delta > 0.0 {
            self.accumulated += delta;
        }
        match self.policy {
            CooldownPolicy::Saturating => false,
            CooldownPolicy::Wrapping => {
                if self.threshold <= 0.0 {
                    self.accumulated = 0.0;
                    return true;
                }
                if self.accumulated > self.threshold {
                    self.accumulated -= self.threshold;
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn can_trigger(&self) -> bool {
        self.accumulated >= self.threshold
    }

    pub fn trigger(&mut self) {
        self.accumulated = 0.0;
    }

    /// Stop over-accumulating while the action is not requested, so releasing
    /// and pressing again cannot fire a burst.
    pub fn reset(&mut self) {
        if self.accumulated >= self.threshold {
            self.accumulated = self.threshold;
        }
    }

    /// `accumulated / threshold`, clamped to 1.0 when `capped`.
    pub fn percent(&self, capped: bool) -> f64 {
        if self.threshold <= 0.0 {
            return 1.0;
        }
        let percent = self.accumulated / self.threshold;
        if capped {
            percent.min(1.0)
        } else {
            percent
        }
    }
}
