//! Error types for the runner

use thiserror::Error;
use tsosi_gateway::ConfigError;
use tsosi_refdata::RefDataError;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    RefData(#[from] RefDataError),

    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RunnerResult<T> = std::result::Result<T, RunnerError>;
