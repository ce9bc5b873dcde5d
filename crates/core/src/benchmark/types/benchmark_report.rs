use serde::{Deserialize, Serialize};

use super::{BenchmarkSummary, CallOutcome};

/// The final result of a run, as returned by `BenchmarkHandle::wait`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub summary: BenchmarkSummary,

    /// The run was stopped before every planned call was made
    #[serde(rename = "stoppedEarly")]
    pub stopped_early: bool,

    /// Wall-clock time from the first dispatch to the end of the run
    #[serde(rename = "elapsedMillis")]
    pub elapsed_millis: u64,

    pub outcomes: Vec<CallOutcome>,
}

impl BenchmarkReport {
    /// Calls actually achieved per second of wall-clock time.
    pub fn achieved_calls_per_second(&self) -> f64 {
        if self.elapsed_millis == 0 {
            return 0.0;
        }

        self.summary.total_calls as f64 / (self.elapsed_millis as f64 / 1000.0)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CallOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.succeeded)
    }
}
