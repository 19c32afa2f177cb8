//! Error types for configuration loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse engine config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("`{field}` must be a finite, non-negative duration (got {value})")]
    InvalidDuration { field: &'static str, value: f64 },

    #[error("`{field}` range is inverted or not finite: [{min}, {max}]")]
    InvalidRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
}
