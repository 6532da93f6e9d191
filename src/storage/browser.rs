//! Browser `localStorage` backend for WASM builds.
//!
//! Values are stored as JSON strings, which is the format the web client's
//! local-storage service uses, so both sides can share the same key. A value
//! that is not JSON is read back as a plain string.

use serde_json::Value;

use super::{KeyValueStore, decode_raw_value};
use crate::error::{ProfileError, Result};

/// Store over `window.localStorage`.
pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    /// Open the current window's local storage.
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| ProfileError::Storage("No window available".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| ProfileError::Storage(format!("localStorage unavailable: {:?}", e)))?
            .ok_or_else(|| ProfileError::Storage("localStorage is disabled".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let raw = self
            .storage
            .get_item(key)
            .map_err(|e| ProfileError::Storage(format!("Failed to read '{}': {:?}", key, e)))?;

        Ok(raw.map(decode_raw_value))
    }

    fn add(&mut self, key: &str, value: Value) -> Result<()> {
        let raw = serde_json::to_string(&value)?;
        self.storage
            .set_item(key, &raw)
            .map_err(|e| ProfileError::Storage(format!("Failed to write '{}': {:?}", key, e)))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| ProfileError::Storage(format!("Failed to remove '{}': {:?}", key, e)))
    }
}
