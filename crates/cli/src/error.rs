use thiserror::Error;

use crate::commands::error::{BenchError, ConfigCommandError, PluginError, RelayerQueryError};

/// Top-level CLI error that composes all module-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error(
        "Configuration required: set the relayer url and API key with `relaydash config set` \
         or pass --url and --api-key"
    )]
    ConfigurationRequired,

    // Module-specific errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigCommandError),

    #[error("Relayer error: {0}")]
    Relayer(#[from] RelayerQueryError),

    #[error("Plugin error: {0}")]
    Plugin(#[from] PluginError),

    #[error("Benchmark error: {0}")]
    Bench(#[from] BenchError),

    // Core library errors (for interoperability)
    #[error("Configuration store error: {0}")]
    Store(#[from] relaydash_core::configuration::ConfigError),

    // Generic/fallback errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("SDK API error: {0}")]
    SdkApi(#[from] relaydash_sdk::ApiSdkError),
}
