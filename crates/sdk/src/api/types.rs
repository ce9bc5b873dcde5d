use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiSdkError {
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl ApiSdkError {
    /// The HTTP status the relayer answered with, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiSdkError::HttpError(e) => e.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiSdkError>;

/// The relayer wraps every payload in a `data` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}
