use serde::{Deserialize, Serialize};

use crate::{
    common_types::{ApiKey, Endpoint},
    shared::utils::non_blank_or,
};

use super::{ConfigError, RelayerConfigDocument};

pub const DEFAULT_RELAYER_URL: &str = "http://localhost:8080";

/// Everything the operator stores between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(rename = "relayerUrl")]
    pub relayer_url: String,

    #[serde(rename = "apiKey")]
    pub api_key: ApiKey,

    /// The relayer service's own configuration file, kept as raw text so it
    /// round-trips exactly as the operator pasted it.
    #[serde(rename = "configJson")]
    pub config_json: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            relayer_url: DEFAULT_RELAYER_URL.to_string(),
            api_key: ApiKey::default(),
            config_json: String::new(),
        }
    }
}

/// On-disk shape; every field may be missing or blank in older files.
#[derive(Debug, Default, Deserialize)]
pub(super) struct StoredConfiguration {
    #[serde(rename = "relayerUrl", default)]
    relayer_url: Option<String>,

    #[serde(rename = "apiKey", default)]
    api_key: Option<String>,

    #[serde(rename = "configJson", default)]
    config_json: Option<String>,
}

impl From<StoredConfiguration> for Configuration {
    fn from(stored: StoredConfiguration) -> Self {
        Self {
            relayer_url: non_blank_or(stored.relayer_url, DEFAULT_RELAYER_URL),
            api_key: ApiKey::new(non_blank_or(stored.api_key, "")),
            config_json: non_blank_or(stored.config_json, ""),
        }
    }
}

impl Configuration {
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.relayer_url.clone(), self.api_key.clone())
    }

    /// Rejects a `config_json` that is present but not well-formed JSON.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.config_json.trim().is_empty() {
            return Ok(());
        }

        serde_json::from_str::<serde_json::Value>(&self.config_json)
            .map(|_| ())
            .map_err(|e| ConfigError::InvalidConfigJson(e.to_string()))
    }

    /// Parses `config_json`; an empty one yields an empty document.
    pub fn document(&self) -> Result<RelayerConfigDocument, ConfigError> {
        if self.config_json.trim().is_empty() {
            return Ok(RelayerConfigDocument::default());
        }

        RelayerConfigDocument::parse(&self.config_json)
    }
}
