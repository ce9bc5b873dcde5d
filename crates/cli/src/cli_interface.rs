use clap::{Parser, Subcommand};

use crate::commands::{
    bench::BenchArgs, config::ConfigCommand, plugins::PluginsCommand, relayers::RelayersCommand,
};

#[derive(Parser)]
#[command(author, version, about = "Operator console for relayer services", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Relayer base url, overrides the stored configuration for this command
    #[arg(long, global = true, env = "RELAYDASH_URL")]
    pub url: Option<String>,

    /// Relayer API key, overrides the stored configuration for this command
    #[arg(long, global = true, env = "RELAYDASH_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Log at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the stored relayer url, API key and relayer configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Inspect relayers, their balances and transactions
    Relayers {
        #[command(subcommand)]
        command: RelayersCommand,
    },
    /// List configured plugins and call them
    Plugins {
        #[command(subcommand)]
        command: PluginsCommand,
    },
    /// Benchmark a plugin with paced calls
    Bench(BenchArgs),
}
