//! Key-value persistence providers.
//!
//! The profile store only needs three operations from its backing storage:
//! read a value by key, write a value under a key, and delete a key. Values
//! are JSON so that any record shape the web client stores round-trips.

#[cfg(feature = "browser")]
pub mod browser;
pub mod file;
pub mod memory;

use serde_json::Value;

use crate::error::Result;

// Re-export commonly used items
#[cfg(feature = "browser")]
pub use browser::BrowserStore;
pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Durable key-value storage keyed by string.
pub trait KeyValueStore {
    /// Read the value under `key`, `Ok(None)` when nothing is stored.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Store `value` under `key`, replacing any prior value.
    fn add(&mut self, key: &str, value: Value) -> Result<()>;

    /// Delete `key`. Deleting a missing key succeeds.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Decode a raw string value as the web client's local-storage service does:
/// JSON when it parses, otherwise the raw text itself.
#[cfg_attr(not(feature = "browser"), allow(dead_code))]
pub(crate) fn decode_raw_value(raw: String) -> Value {
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(_) => Value::String(raw),
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        (**self).get(key)
    }

    fn add(&mut self, key: &str, value: Value) -> Result<()> {
        (**self).add(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
