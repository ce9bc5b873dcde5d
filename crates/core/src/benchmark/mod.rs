//! Paced plugin benchmarks.
//!
//! A run issues `total_calls` invocations one at a time, waiting
//! `timeframe / total_calls` between them, and reports each outcome to a
//! [`ProgressSink`] as it is recorded. Runs are cancelled cooperatively
//! through their [`BenchmarkHandle`].

mod client;
pub use client::{InvocationClient, InvocationFailure, UNKNOWN_ERROR_MESSAGE};

mod error;
pub use error::{BenchmarkError, ValidationError};

mod handle;
pub use handle::BenchmarkHandle;

mod runner;
pub use runner::BenchmarkRunner;

mod sink;
pub use sink::{ChannelProgressSink, ProgressEvent, ProgressSink};

mod types;
pub use types::*;
