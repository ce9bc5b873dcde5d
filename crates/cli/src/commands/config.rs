use std::{fs, path::PathBuf};

use clap::{Args, Subcommand};
use dialoguer::{Confirm, Input, Password};
use relaydash_core::{
    common_types::ApiKey,
    configuration::{ConfigStore, Configuration, RelayerConfigDocument},
};

use crate::{
    commands::error::ConfigCommandError,
    connection::Connection,
    console::{print_details, print_success_message, print_warn_message},
};

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the configuration commands will use
    Show {
        /// Print the raw relayer configuration JSON as well
        #[arg(long)]
        full: bool,
    },
    /// Store the relayer url, API key and relayer configuration
    Set(SetArgs),
    /// Print an empty relayer configuration to start from
    Template,
    /// Delete the stored configuration
    Clear {
        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Args)]
pub struct SetArgs {
    /// Base url of the relayer
    #[arg(long)]
    pub relayer_url: Option<String>,

    /// API key sent as a bearer token
    #[arg(long)]
    pub relayer_api_key: Option<String>,

    /// The relayer's configuration JSON, inline
    #[arg(long, conflicts_with = "config_file")]
    pub config_json: Option<String>,

    /// Read the relayer's configuration JSON from a file
    #[arg(long)]
    pub config_file: Option<PathBuf>,
}

impl SetArgs {
    fn is_empty(&self) -> bool {
        self.relayer_url.is_none()
            && self.relayer_api_key.is_none()
            && self.config_json.is_none()
            && self.config_file.is_none()
    }
}

pub fn handle_config(
    command: &ConfigCommand,
    store: &ConfigStore,
    connection: &Connection,
) -> Result<(), ConfigCommandError> {
    match command {
        ConfigCommand::Show { full } => handle_show(*full, store, connection),
        ConfigCommand::Set(args) => handle_set(args, store),
        ConfigCommand::Template => handle_template(),
        ConfigCommand::Clear { yes } => handle_clear(*yes, store),
    }
}

fn handle_show(
    full: bool,
    store: &ConfigStore,
    connection: &Connection,
) -> Result<(), ConfigCommandError> {
    let config = connection.configuration();

    let source = match (store.has_stored(), connection.is_overridden()) {
        (_, true) => "stored, with command line / environment overrides".to_string(),
        (true, false) => store.path().display().to_string(),
        (false, false) => "defaults (nothing stored yet)".to_string(),
    };

    let api_key =
        if config.api_key.is_empty() { "(not set)".to_string() } else { config.api_key.masked() };

    let plugins = match config.document() {
        Ok(document) => document.plugins.len().to_string(),
        Err(e) => format!("invalid configuration JSON: {}", e),
    };

    print_details(
        "Relayer configuration",
        &[
            ("Source", source),
            ("Relayer URL", config.relayer_url.clone()),
            ("API key", api_key),
            ("Plugins", plugins),
        ],
    );

    if full && !config.config_json.trim().is_empty() {
        println!("\n{}", config.config_json);
    }

    Ok(())
}

fn handle_set(args: &SetArgs, store: &ConfigStore) -> Result<(), ConfigCommandError> {
    let mut config = store.load();

    if args.is_empty() {
        prompt_connection(&mut config)?;
    } else {
        apply_args(args, &mut config)?;
    }

    config.validate()?;
    store.save(&config)?;

    print_success_message(&format!("Configuration saved to {}", store.path().display()));
    if config.api_key.is_empty() {
        print_warn_message("No API key stored yet; relayer commands will need --api-key.");
    }

    Ok(())
}

fn apply_args(args: &SetArgs, config: &mut Configuration) -> Result<(), ConfigCommandError> {
    if let Some(url) = &args.relayer_url {
        config.relayer_url = url.trim().to_string();
    }

    if let Some(api_key) = &args.relayer_api_key {
        config.api_key = ApiKey::new(api_key.trim());
    }

    if let Some(config_json) = &args.config_json {
        config.config_json = config_json.clone();
    }

    if let Some(path) = &args.config_file {
        config.config_json = fs::read_to_string(path).map_err(|source| {
            ConfigCommandError::ReadFile { path: path.display().to_string(), source }
        })?;
    }

    Ok(())
}

fn prompt_connection(config: &mut Configuration) -> Result<(), ConfigCommandError> {
    let relayer_url: String = Input::new()
        .with_prompt("Relayer URL")
        .default(config.relayer_url.clone())
        .interact_text()?;
    config.relayer_url = relayer_url.trim().to_string();

    let api_key = Password::new()
        .with_prompt("API key (leave empty to keep the current one)")
        .allow_empty_password(true)
        .interact()?;
    if !api_key.trim().is_empty() {
        config.api_key = ApiKey::new(api_key.trim());
    }

    Ok(())
}

fn handle_template() -> Result<(), ConfigCommandError> {
    println!("{}", RelayerConfigDocument::template().to_pretty_json()?);
    Ok(())
}

fn handle_clear(yes: bool, store: &ConfigStore) -> Result<(), ConfigCommandError> {
    if !store.has_stored() {
        print_warn_message("No stored configuration to clear.");
        return Ok(());
    }

    let confirmed = yes
        || Confirm::new()
            .with_prompt(format!("Delete {}?", store.path().display()))
            .default(false)
            .interact()?;

    if confirmed {
        store.clear()?;
        print_success_message("Stored configuration cleared.");
    }

    Ok(())
}
