use std::env;

#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::Parser;
use relaydash_core::{configuration::ConfigStore, load_env_from_dir, setup_logger};
use tracing::level_filters::LevelFilter;

use crate::{
    cli_interface::{Cli, Commands},
    commands::{bench, config, plugins, relayers},
    connection::Connection,
    console::print_error_message,
    error::CliError,
};

mod cli_interface;
mod commands;
mod connection;
mod console;
mod error;

async fn run(cli: Cli) -> Result<(), CliError> {
    let store = ConfigStore::default_location()?;
    let connection = Connection::resolve(&store, cli.url, cli.api_key);

    match &cli.command {
        Commands::Config { command } => {
            config::handle_config(command, &store, &connection)?;
        }
        Commands::Relayers { command } => {
            let sdk = connection.sdk()?;
            relayers::handle_relayers(command, &sdk).await?;
        }
        Commands::Plugins { command } => {
            plugins::handle_plugins(command, &connection).await?;
        }
        Commands::Bench(args) => {
            bench::handle_bench(args, &connection).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    if let Ok(current_dir) = env::current_dir() {
        load_env_from_dir(&current_dir);
    }

    let cli = Cli::parse();
    setup_logger(if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO });

    run(cli).await.inspect_err(|e| print_error_message(&e.to_string()))
}
