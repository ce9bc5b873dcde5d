use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::plugin::PluginDefinition;

use super::ConfigError;

/// The relayer service configuration file.
///
/// Only `plugins` is interpreted here; the other sections are carried as
/// opaque JSON so nothing the operator wrote is lost.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RelayerConfigDocument {
    #[serde(default)]
    pub relayers: Vec<Value>,

    #[serde(default)]
    pub notifications: Vec<Value>,

    #[serde(default)]
    pub signers: Vec<Value>,

    #[serde(default)]
    pub plugins: Vec<PluginDefinition>,
}

impl RelayerConfigDocument {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::InvalidConfigJson(e.to_string()))
    }

    /// The empty skeleton offered to new operators.
    pub fn template() -> Self {
        Self::default()
    }

    pub fn to_pretty_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn plugin(&self, id: &str) -> Option<&PluginDefinition> {
        self.plugins.iter().find(|plugin| plugin.id == id)
    }
}
