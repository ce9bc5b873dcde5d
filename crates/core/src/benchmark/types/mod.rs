mod benchmark_request;
pub use benchmark_request::BenchmarkRequest;

mod call_outcome;
pub use call_outcome::CallOutcome;

mod benchmark_summary;
pub use benchmark_summary::BenchmarkSummary;

mod benchmark_report;
pub use benchmark_report::BenchmarkReport;

mod run_state;
pub use run_state::RunState;
