//! JSON file key-value store.
//!
//! The whole store is one JSON object on disk, `{ "<key>": <value>, ... }`.
//! It is the native stand-in for browser local storage: data written by one
//! process is there for the next one.
//!
//! Every operation re-reads the file, so two handles on the same path see
//! each other's writes.

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::{ProfileError, Result};

/// Key-value store persisted as a single JSON object file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path`. The file is not touched until the
    /// first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every entry from disk. A missing file is an empty store.
    fn load(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| ProfileError::Storage(format!("Failed to read store: {}", e)))?;

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str(&content)
            .map_err(|e| ProfileError::Storage(format!("Failed to parse store: {}", e)))?
        {
            Value::Object(entries) => Ok(entries),
            _ => Err(ProfileError::Storage(format!(
                "Store file {} is not a JSON object",
                self.path.display()
            ))),
        }
    }

    /// Write every entry to disk, creating the parent directory if needed.
    fn persist(&self, entries: &Map<String, Value>) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    ProfileError::Storage(format!("Failed to create store dir: {}", e))
                })?;
            }
        }

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| ProfileError::Storage(format!("Failed to serialize store: {}", e)))?;

        std::fs::write(&self.path, content)
            .map_err(|e| ProfileError::Storage(format!("Failed to write store: {}", e)))?;

        log::debug!("{} entries written to {}", entries.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.load()?.remove(key))
    }

    fn add(&mut self, key: &str, value: Value) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value);
        self.persist(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}
