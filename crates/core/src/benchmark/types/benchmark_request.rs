use std::time::Duration;

use serde_json::Value;

use crate::{benchmark::ValidationError, common_types::Endpoint};

/// Everything a single benchmark run needs. Never mutated once the run starts.
#[derive(Debug, Clone)]
pub struct BenchmarkRequest {
    /// Passed straight through to the invocation client
    pub endpoint: Endpoint,

    /// The remote operation (plugin id) to call
    pub operation_id: String,

    /// Already-parsed parameters sent with every call
    pub parameters: Value,

    /// How many calls to make
    pub total_calls: usize,

    /// Wall-clock budget the calls are spread over
    pub timeframe_seconds: f64,
}

impl BenchmarkRequest {
    pub fn new(
        endpoint: Endpoint,
        operation_id: impl Into<String>,
        parameters: Value,
        total_calls: usize,
        timeframe_seconds: f64,
    ) -> Self {
        Self {
            endpoint,
            operation_id: operation_id.into(),
            parameters,
            total_calls,
            timeframe_seconds,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.total_calls == 0 {
            return Err(ValidationError::NoCalls);
        }

        if !self.timeframe_seconds.is_finite() || self.timeframe_seconds <= 0.0 {
            return Err(ValidationError::InvalidTimeframe(self.timeframe_seconds));
        }

        if self.operation_id.trim().is_empty() {
            return Err(ValidationError::MissingOperationId);
        }

        Ok(())
    }

    /// The pause between one call finishing and the next one starting.
    ///
    /// Only meaningful for a validated request. Saturates at `Duration::MAX`.
    pub fn interval(&self) -> Duration {
        let seconds = self.timeframe_seconds / self.total_calls.max(1) as f64;
        Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX)
    }

    pub fn calls_per_second(&self) -> f64 {
        if self.timeframe_seconds > 0.0 {
            self.total_calls as f64 / self.timeframe_seconds
        } else {
            0.0
        }
    }
}
