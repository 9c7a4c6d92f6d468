use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Result,
    fs::{config_dir, state_dir},
    repository::store::DEFAULT_KEY,
};

const FILE_NAME: &str = "core.toml";
const STORE_FILE_NAME: &str = "settings.db";

/// The backend's core configuration, serialized to TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Key the plant list is saved under in the blob store
    storage_key: String,
    /// Location of the blob store database. Defaults to the state directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    store_path: Option<PathBuf>,
}

impl CoreConfig {
    /// Load the configuration file from the config directory, writing out the defaults if there
    /// isn't one yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_dir()?.join(FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            let cfg = Self::default();
            cfg.save_to(path)?;
            debug!("Wrote default configuration to {}", path.display());
            Ok(cfg)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, contents)?;

        Ok(())
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn set_storage_key(&mut self, key: impl Into<String>) {
        self.storage_key = key.into();
    }

    /// The blob store database path, falling back to the state directory.
    pub fn store_path(&self) -> Result<PathBuf> {
        match &self.store_path {
            Some(path) => Ok(path.clone()),
            None => Ok(state_dir()?.join(STORE_FILE_NAME)),
        }
    }

    pub fn set_store_path(&mut self, path: impl Into<PathBuf>) {
        self.store_path = Some(path.into());
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_KEY.to_string(),
            store_path: None,
        }
    }
}
