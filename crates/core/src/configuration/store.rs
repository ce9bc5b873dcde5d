use std::{fs, path::PathBuf};

use crate::{relaydash_error, relaydash_info, write_file};

use super::{settings::StoredConfiguration, ConfigError, Configuration};

/// Fixed key the configuration is stored under.
pub const STORAGE_KEY: &str = "relayer-config";

const STORAGE_DIR_ENV: &str = "RELAYDASH_HOME";

/// File-backed key-value store holding the operator's [`Configuration`].
#[derive(Debug, Clone)]
pub struct ConfigStore {
    storage_dir: PathBuf,
}

impl ConfigStore {
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        Self { storage_dir: storage_dir.into() }
    }

    /// `$RELAYDASH_HOME` if set, otherwise `~/.relaydash`.
    pub fn default_location() -> Result<Self, ConfigError> {
        if let Some(dir) = std::env::var_os(STORAGE_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(Self::new(PathBuf::from(dir)));
        }

        let home_dir = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(Self::new(home_dir.join(".relaydash")))
    }

    pub fn path(&self) -> PathBuf {
        self.storage_dir.join(format!("{}.json", STORAGE_KEY))
    }

    pub fn save(&self, config: &Configuration) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)?;
        write_file(&self.path(), &json)?;
        relaydash_info!("Saved configuration to {}", self.path().display());
        Ok(())
    }

    /// Loads the stored configuration.
    ///
    /// Never fails: a missing file yields the defaults, and an unreadable or
    /// corrupt one is logged and also yields the defaults.
    pub fn load(&self) -> Configuration {
        match self.try_load() {
            Ok(Some(config)) => config,
            Ok(None) => Configuration::default(),
            Err(e) => {
                relaydash_error!("Failed to load configuration from {}: {}", self.path().display(), e);
                Configuration::default()
            }
        }
    }

    fn try_load(&self) -> Result<Option<Configuration>, ConfigError> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        let stored: StoredConfiguration = serde_json::from_str(&contents)?;
        Ok(Some(stored.into()))
    }

    pub fn clear(&self) -> Result<(), ConfigError> {
        let path = self.path();
        if path.exists() {
            fs::remove_file(&path)?;
            relaydash_info!("Removed stored configuration {}", path.display());
        }
        Ok(())
    }

    pub fn has_stored(&self) -> bool {
        self.path().is_file()
    }
}
