use thiserror::Error;

use starforce_core::error::ConfigError;
use starforce_sim::EngineError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read {path}: {source}")]
    ReadConfig {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(std::io::Error),
    #[error("game loop thread panicked")]
    LoopPanicked,
    #[error("failed to encode session summary: {0}")]
    Summary(#[from] serde_json::Error),
}
