//! The current-user accessor.
//!
//! [`CurrentUser`] owns a key-value store and the single live [`Profile`]
//! loaded from it. Callers update the profile in memory, then call
//! [`CurrentUser::save`] or [`CurrentUser::remove`] to persist or clear it.
//!
//! # Example
//!
//! ```
//! use current_user::{CurrentUser, MemoryStore};
//!
//! fn main() -> current_user::Result<()> {
//!     let mut user = CurrentUser::initialize(MemoryStore::new())?;
//!     assert!(!user.is_logged_in());
//!
//!     user.login("al", "x");
//!     user.save()?;
//!
//!     // Simulate a reload: hand the store to a fresh accessor.
//!     let user = CurrentUser::initialize(user.into_store())?;
//!     assert!(user.is_logged_in());
//!     assert_eq!(user.profile().username, "al");
//!     Ok(())
//! }
//! ```

use serde_json::Value;

use crate::error::Result;
use crate::profile::{self, Profile, encode_basic_authorization};
use crate::storage::KeyValueStore;

/// Storage key the profile record lives under.
pub const USER_KEY: &str = "authorizationEncoded";

/// Read the profile stored under `key`.
///
/// # Arguments
/// * `store` - Persistence provider to read from
/// * `key` - Storage key of the profile record
///
/// # Returns
/// The stored profile. Nothing stored, or a falsy value (`null`, `false`,
/// `""`, `0`), yields an empty profile. Fields are copied leniently, see
/// [`Profile`]; a truthy value that is not an object has no fields, so it
/// also yields an empty profile.
///
/// # Errors
/// Only what the persistence provider itself reports.
pub fn load_profile<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Result<Profile> {
    match store.get(key)? {
        Some(value @ Value::Object(_)) => Ok(serde_json::from_value(value)?),
        Some(value) if !is_falsy(&value) => {
            log::warn!("Value under '{}' is not a profile record, ignoring it", key);
            Ok(Profile::logged_out())
        }
        _ => Ok(Profile::logged_out()),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

/// Current user's profile bound to its persistence provider.
#[derive(Debug)]
pub struct CurrentUser<S: KeyValueStore> {
    store: S,
    key: String,
    profile: Profile,
}

impl<S: KeyValueStore> CurrentUser<S> {
    /// Load the persisted profile from `store` under [`USER_KEY`].
    pub fn initialize(store: S) -> Result<Self> {
        Self::with_key(store, USER_KEY)
    }

    /// Load the persisted profile from `store` under a custom key.
    pub fn with_key(store: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let profile = load_profile(&store, &key)?;
        log::debug!("Loaded profile for '{}' from key '{}'", profile.username, key);
        Ok(Self {
            store,
            key,
            profile,
        })
    }

    /// Write the in-memory profile, as it is right now, under the key.
    pub fn save(&mut self) -> Result<()> {
        let value = serde_json::to_value(&self.profile)?;
        self.store.add(&self.key, value)
    }

    /// Delete the stored record. The in-memory profile is left untouched.
    pub fn remove(&mut self) -> Result<()> {
        self.store.remove(&self.key)
    }

    /// The live profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Mutable access to the live profile.
    pub fn profile_mut(&mut self) -> &mut Profile {
        &mut self.profile
    }

    /// Replace the live profile.
    pub fn set_profile(&mut self, profile: Profile) {
        self.profile = profile;
    }

    /// Replace the live profile with `f(current)`.
    ///
    /// ```
    /// # use current_user::{CurrentUser, MemoryStore};
    /// # let mut user = CurrentUser::initialize(MemoryStore::new()).unwrap();
    /// user.update(|p| p.with_username("al").with_authorization("tok123"));
    /// assert!(user.is_logged_in());
    /// ```
    pub fn update(&mut self, f: impl FnOnce(Profile) -> Profile) {
        let current = std::mem::take(&mut self.profile);
        self.profile = f(current);
    }

    /// Whether the live profile carries a token. Logs the token it checked.
    pub fn is_logged_in(&self) -> bool {
        log::info!(
            "Checking if user is logged in {}",
            self.profile.authorization_encoded
        );
        profile::is_logged_in(&self.profile)
    }

    /// Fill the profile with credentials and their Basic token.
    ///
    /// Nothing is persisted until [`save`](Self::save).
    pub fn login(&mut self, username: &str, password: &str) {
        let token = encode_basic_authorization(username, password);
        self.profile = Profile::new(username, password, token);
    }

    /// Clear the in-memory profile and delete the stored record.
    pub fn logout(&mut self) -> Result<()> {
        self.profile = Profile::logged_out();
        self.remove()
    }

    /// Storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The persistence provider.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the persistence provider back, dropping the live profile.
    pub fn into_store(self) -> S {
        self.store
    }
}

// =============================================================================
// Tests
// =============================================================================
