use std::{fs, path::PathBuf};

use clap::{Args, Subcommand};
use colored::Colorize;
use relaydash_core::plugin::{PluginCallResult, parse_parameters};
use serde_json::Value;

use crate::{
    commands::error::PluginError,
    connection::Connection,
    console::{print_details, print_error_message, print_table, print_warn_message},
};

#[derive(Subcommand)]
pub enum PluginsCommand {
    /// List the plugins declared in the stored relayer configuration
    List,
    /// Call a plugin once and show its result
    Call {
        /// The plugin id
        plugin: String,

        #[command(flatten)]
        params: ParamsArgs,
    },
}

/// Plugin parameters, given inline or read from a file.
#[derive(Args, Debug, Default)]
pub struct ParamsArgs {
    /// Parameters as JSON, e.g. '{"foo":"bar"}'
    #[arg(long, conflicts_with = "params_file")]
    pub params: Option<String>,

    /// Read the parameters JSON from a file
    #[arg(long)]
    pub params_file: Option<PathBuf>,
}

impl ParamsArgs {
    /// The parsed parameters; nothing given means `{}`.
    pub fn resolve(&self) -> Result<Value, PluginError> {
        let text = match (&self.params, &self.params_file) {
            (Some(params), _) => params.clone(),
            (None, Some(path)) => fs::read_to_string(path).map_err(|source| {
                PluginError::ReadFile { path: path.display().to_string(), source }
            })?,
            (None, None) => String::new(),
        };

        Ok(parse_parameters(&text)?)
    }
}

pub async fn handle_plugins(
    command: &PluginsCommand,
    connection: &Connection,
) -> Result<(), PluginError> {
    match command {
        PluginsCommand::List => handle_list(connection),
        PluginsCommand::Call { plugin, params } => handle_call(plugin, params, connection).await,
    }
}

fn handle_list(connection: &Connection) -> Result<(), PluginError> {
    let document = connection.configuration().document()?;

    if document.plugins.is_empty() {
        print_warn_message(
            "No plugins configured. Store your relayer configuration with `relaydash config set --config-file <path>`.",
        );
        return Ok(());
    }

    let rows = document
        .plugins
        .iter()
        .map(|plugin| vec![plugin.id.clone(), plugin.path.clone()])
        .collect();

    let title = format!("{} Plugins:", document.plugins.len());
    print_table(vec!["Id", "Path"], rows, Some(&title), None);

    Ok(())
}

async fn handle_call(
    plugin: &str,
    params: &ParamsArgs,
    connection: &Connection,
) -> Result<(), PluginError> {
    let params = params.resolve()?;
    let sdk = connection.sdk()?;

    let result = sdk.plugin.call(plugin, &params).await?;
    print_call_result(plugin, &result)?;

    Ok(())
}

fn print_call_result(plugin: &str, result: &PluginCallResult) -> Result<(), PluginError> {
    let status = if result.success { "Success".green() } else { "Failed".red() };

    let mut details = vec![("Status", status.to_string())];
    if let Some(message) = result.message.as_deref().filter(|m| !m.is_empty()) {
        details.push(("Message", message.to_string()));
    }
    details.push(("Return value", render_return_value(result.return_value.as_ref())?));

    print_details(&format!("Plugin {}", plugin), &details);

    if let Some(error) = result.error_message() {
        print_error_message(&format!("Error: {}", error));
    }

    if !result.logs.is_empty() {
        let rows =
            result.logs.iter().map(|log| vec![log.level.clone(), log.message.clone()]).collect();
        print_table(vec!["Level", "Message"], rows, Some("Logs:"), None);
    }

    if !result.traces.is_empty() {
        println!("\nTraces:");
        println!("{}", serde_json::to_string_pretty(&result.traces)?);
    }

    Ok(())
}

/// Relayers usually return the plugin's value JSON-encoded in a string;
/// show it decoded and pretty-printed when it is.
fn render_return_value(value: Option<&Value>) -> Result<String, PluginError> {
    match value {
        None | Some(Value::Null) => Ok("-".to_string()),
        Some(Value::String(text)) => match serde_json::from_str::<Value>(text) {
            Ok(decoded) if decoded.is_object() || decoded.is_array() => {
                Ok(serde_json::to_string_pretty(&decoded)?)
            }
            _ => Ok(text.clone()),
        },
        Some(other) => Ok(serde_json::to_string_pretty(other)?),
    }
}
