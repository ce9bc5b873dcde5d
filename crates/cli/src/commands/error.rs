use relaydash_core::{benchmark::BenchmarkError, plugin::ParametersError};
use thiserror::Error;

/// Errors that can occur while managing the stored configuration
#[derive(Error, Debug)]
pub enum ConfigCommandError {
    #[error("Store error: {0}")]
    Store(#[from] relaydash_core::configuration::ConfigError),

    #[error("Could not read {path}: {source}")]
    ReadFile { path: String, source: std::io::Error },

    #[error("Terminal interaction failed: {0}")]
    Terminal(#[from] dialoguer::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while querying relayers
#[derive(Error, Debug)]
pub enum RelayerQueryError {
    #[error("Invalid relayer id: {0}")]
    InvalidId(String),

    #[error("SDK API error: {0}")]
    SdkApi(#[from] relaydash_sdk::ApiSdkError),
}

/// Errors that can occur during plugin operations
#[derive(Error, Debug)]
pub enum PluginError {
    #[error("{0}")]
    Connection(String),

    #[error("Could not read the relayer configuration: {0}")]
    Document(#[from] relaydash_core::configuration::ConfigError),

    #[error("Invalid parameters: {0}")]
    Parameters(#[from] ParametersError),

    #[error("Could not read {path}: {source}")]
    ReadFile { path: String, source: std::io::Error },

    #[error("SDK API error: {0}")]
    SdkApi(#[from] relaydash_sdk::ApiSdkError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<crate::error::CliError> for PluginError {
    fn from(err: crate::error::CliError) -> Self {
        Self::Connection(err.to_string())
    }
}

/// Errors that can occur while running a benchmark
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("{0}")]
    Connection(String),

    #[error(transparent)]
    Plugin(#[from] PluginError),

    #[error(transparent)]
    Benchmark(#[from] BenchmarkError),

    #[error("SDK API error: {0}")]
    SdkApi(#[from] relaydash_sdk::ApiSdkError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<crate::error::CliError> for BenchError {
    fn from(err: crate::error::CliError) -> Self {
        Self::Connection(err.to_string())
    }
}

impl From<ParametersError> for BenchError {
    fn from(err: ParametersError) -> Self {
        Self::Plugin(PluginError::Parameters(err))
    }
}
