use thiserror::Error;

use starforce_core::error::ConfigError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine has been destroyed")]
    Destroyed,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
