use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::common_types::Endpoint;

pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// A failed invocation. The benchmark does not care why a call failed, only
/// what to show the operator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", self.describe())]
pub struct InvocationFailure {
    message: Option<String>,
}

impl InvocationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()) }
    }

    /// A failure that carries no description.
    pub fn unknown() -> Self {
        Self { message: None }
    }

    /// The failure's message, or [`UNKNOWN_ERROR_MESSAGE`] when it has none.
    pub fn describe(&self) -> &str {
        match self.message.as_deref() {
            Some(message) if !message.trim().is_empty() => message,
            _ => UNKNOWN_ERROR_MESSAGE,
        }
    }
}

/// Issues one remote call.
///
/// Network errors, non-success statuses and undecodable responses must all
/// surface as `Err`; the benchmark records them as failed calls.
#[async_trait]
pub trait InvocationClient: Send + Sync {
    async fn invoke(
        &self,
        endpoint: &Endpoint,
        operation_id: &str,
        parameters: &Value,
    ) -> Result<Value, InvocationFailure>;
}
