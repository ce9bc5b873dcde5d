use relaydash_core::{
    common_types::{ApiKey, Endpoint},
    configuration::{ConfigStore, Configuration},
};
use relaydash_sdk::SDK;

use crate::error::CliError;

/// The configuration a command runs with: what is stored, with any
/// `--url` / `--api-key` overrides applied on top.
pub struct Connection {
    configuration: Configuration,
    overridden: bool,
}

impl Connection {
    pub fn resolve(store: &ConfigStore, url: Option<String>, api_key: Option<String>) -> Self {
        Self::with_overrides(store.load(), url, api_key)
    }

    fn with_overrides(
        mut configuration: Configuration,
        url: Option<String>,
        api_key: Option<String>,
    ) -> Self {
        let mut overridden = false;

        if let Some(url) = url.filter(|url| !url.trim().is_empty()) {
            configuration.relayer_url = url;
            overridden = true;
        }

        if let Some(api_key) = api_key.filter(|key| !key.trim().is_empty()) {
            configuration.api_key = ApiKey::new(api_key);
            overridden = true;
        }

        Self { configuration, overridden }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Whether a flag or environment variable replaced a stored value.
    pub fn is_overridden(&self) -> bool {
        self.overridden
    }

    /// The relayer to talk to; both the url and the API key must be set.
    pub fn endpoint(&self) -> Result<Endpoint, CliError> {
        let endpoint = self.configuration.endpoint();
        if !endpoint.is_configured() {
            return Err(CliError::ConfigurationRequired);
        }

        Ok(endpoint)
    }

    pub fn sdk(&self) -> Result<SDK, CliError> {
        Ok(SDK::new(self.endpoint()?))
    }
}
