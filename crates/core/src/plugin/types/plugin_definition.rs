use serde::{Deserialize, Serialize};

/// A plugin entry from the relayer configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PluginDefinition {
    pub id: String,

    #[serde(default)]
    pub path: String,
}
