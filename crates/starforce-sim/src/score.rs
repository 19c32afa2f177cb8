//! Running score: meteors destroyed and survival time.

use starforce_core::state::ScoreView;

#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub meteors_destroyed: u32,
    /// Engine time (seconds) when the game started.
    started_at: Option<f64>,
    /// Engine time (seconds) when the ship died.
    ended_at: Option<f64>,
}

impl ScoreState {
    pub fn start(&mut self, now: f64) {
        *self = Self {
            started_at: Some(now),
            ..Default::default()
        };
    }

    pub fn record_meteor(&mut self) {
        self.meteors_destroyed += 1;
    }

    /// Freeze the survival clock. Only the first death counts.
    pub fn record_death(&mut self, now: f64) {
        if self.ended_at.is_none() {
            self.ended_at = Some(now);
        }
    }

    pub fn survival_secs(&self, now: f64) -> f64 {
        match self.started_at {
            Some(start) => (self.ended_at.unwrap_or(now) - start).max(0.0),
            None => 0.0,
        }
    }

    pub fn view(&self, now: f64) -> ScoreView {
        ScoreView {
            meteors_destroyed: self.meteors_destroyed,
            survival_secs: self.survival_secs(now),
        }
    }
}
