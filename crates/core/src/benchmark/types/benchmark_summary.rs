use serde::{Deserialize, Serialize};

use super::CallOutcome;

/// Aggregate statistics over a run's outcomes.
///
/// Always recomputed from the full outcome list, never updated in place.
/// Duration statistics only consider successful calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSummary {
    #[serde(rename = "totalCalls")]
    pub total_calls: usize,

    #[serde(rename = "successfulCalls")]
    pub successful_calls: usize,

    #[serde(rename = "failedCalls")]
    pub failed_calls: usize,

    #[serde(rename = "successRatePercent")]
    pub success_rate_percent: f64,

    #[serde(rename = "averageDurationMillis")]
    pub average_duration_millis: f64,

    #[serde(rename = "minDurationMillis")]
    pub min_duration_millis: u64,

    #[serde(rename = "maxDurationMillis")]
    pub max_duration_millis: u64,
}

impl BenchmarkSummary {
    pub fn from_outcomes(outcomes: &[CallOutcome]) -> Self {
        let total_calls = outcomes.len();
        let durations: Vec<u64> = outcomes
            .iter()
            .filter(|outcome| outcome.succeeded)
            .map(|outcome| outcome.duration_millis)
            .collect();
        let successful_calls = durations.len();

        let success_rate_percent = if total_calls == 0 {
            0.0
        } else {
            successful_calls as f64 / total_calls as f64 * 100.0
        };

        let average_duration_millis = if durations.is_empty() {
            0.0
        } else {
            durations.iter().map(|d| *d as f64).sum::<f64>() / durations.len() as f64
        };

        Self {
            total_calls,
            successful_calls,
            failed_calls: total_calls - successful_calls,
            success_rate_percent,
            average_duration_millis,
            min_duration_millis: durations.iter().copied().min().unwrap_or(0),
            max_duration_millis: durations.iter().copied().max().unwrap_or(0),
        }
    }
}
