//! Settings for where and how the profile is stored.
//!
//! Cross-platform: files live in the platform config directory.
//! - Linux: ~/.config/current-user/
//! - Windows: %APPDATA%\current-user\

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::current_user::USER_KEY;
use crate::error::{ProfileError, Result};
use crate::storage::JsonFileStore;

// =============================================================================
// Config Path
// =============================================================================

const APP_NAME: &str = "current-user";
const CONFIG_FILE: &str = "config.json";
const STORE_FILE: &str = "local_storage.json";

/// Get the configuration directory path.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or(ProfileError::ConfigDirNotFound)
}

/// Get the full path to the config file.
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

// =============================================================================
// Settings
// =============================================================================

/// Contents of `config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Key the profile record is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Store file; defaults to `local_storage.json` next to the config file
    #[serde(default)]
    pub store_path: Option<PathBuf>,
}

fn default_storage_key() -> String {
    USER_KEY.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            store_path: None,
        }
    }
}

impl AppConfig {
    /// Resolve the store file, falling back to the config directory.
    pub fn resolve_store_path(&self) -> Result<PathBuf> {
        match &self.store_path {
            Some(path) => Ok(path.clone()),
            None => Ok(get_config_dir()?.join(STORE_FILE)),
        }
    }

    /// Open the file store these settings point at.
    pub fn open_store(&self) -> Result<JsonFileStore> {
        Ok(JsonFileStore::new(self.resolve_store_path()?))
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Load settings from the default config path, defaults if absent.
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&get_config_path()?)
}

/// Load settings from `path`, defaults if the file does not exist.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ProfileError::Storage(format!("Failed to read config: {}", e)))?;

    let config: AppConfig = serde_json::from_str(&content)
        .map_err(|e| ProfileError::InvalidInput(format!("Failed to parse config: {}", e)))?;

    if config.storage_key.is_empty() {
        return Err(ProfileError::InvalidInput(
            "storage_key must not be empty".into(),
        ));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage_key, "authorizationEncoded");
    }

    #[test]
    fn test_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "store_path": "/tmp/users.json" }"#).unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.storage_key, USER_KEY);
        assert_eq!(
            config.resolve_store_path().unwrap(),
            PathBuf::from("/tmp/users.json")
        );
    }

    #[test]
    fn test_empty_storage_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "storage_key": "" }"#).unwrap();

        assert!(matches!(
            load_config_from(&path),
            Err(ProfileError::InvalidInput(_))
        ));
    }
}
