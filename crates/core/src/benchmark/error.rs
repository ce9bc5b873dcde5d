use thiserror::Error;

/// A benchmark request that cannot be run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Number of calls must be at least 1")]
    NoCalls,

    #[error("Timeframe must be a positive number of seconds, got {0}")]
    InvalidTimeframe(f64),

    #[error("Operation id cannot be empty")]
    MissingOperationId,
}

#[derive(Error, Debug)]
pub enum BenchmarkError {
    #[error("Invalid benchmark request: {0}")]
    Validation(#[from] ValidationError),

    #[error("Benchmark run is still active")]
    RunActive,

    #[error("Benchmark results have been cleared")]
    Cleared,

    #[error("Benchmark task failed: {0}")]
    TaskFailed(String),
}
