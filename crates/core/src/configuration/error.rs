use thiserror::Error;

use crate::WriteFileError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not resolve a home directory for the configuration store")]
    NoHomeDir,

    #[error("Failed to read configuration: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to write configuration: {0}")]
    Write(#[from] WriteFileError),

    #[error("Configuration JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid relayer configuration JSON: {0}")]
    InvalidConfigJson(String),
}
