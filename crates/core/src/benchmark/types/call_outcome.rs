use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The result of one call in a run. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallOutcome {
    /// 1-based position in issue order
    #[serde(rename = "callIndex")]
    pub call_index: usize,

    /// Dispatch to response (or failure), in milliseconds
    #[serde(rename = "durationMillis")]
    pub duration_millis: u64,

    pub succeeded: bool,

    /// Only set when `succeeded`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub response: Option<Value>,

    /// Only set when not `succeeded`
    #[serde(rename = "errorMessage", skip_serializing_if = "Option::is_none", default)]
    pub error_message: Option<String>,

    pub timestamp: DateTime<Utc>,
}

impl CallOutcome {
    pub fn success(call_index: usize, duration_millis: u64, response: Value) -> Self {
        Self::record(call_index, duration_millis, Ok(response))
    }

    pub fn failure(
        call_index: usize,
        duration_millis: u64,
        error_message: impl Into<String>,
    ) -> Self {
        Self::record(call_index, duration_millis, Err(error_message.into()))
    }

    fn record(call_index: usize, duration_millis: u64, result: Result<Value, String>) -> Self {
        let (succeeded, response, error_message) = match result {
            Ok(response) => (true, Some(response), None),
            Err(message) => (false, None, Some(message)),
        };

        Self {
            call_index,
            duration_millis,
            succeeded,
            response,
            error_message,
            timestamp: Utc::now(),
        }
    }
}
