//! Current User Profile Store
//!
//! Keeps the signed-in user's login profile in persistent key-value storage
//! and tells you whether that user is logged in.
//!
//! # Features
//!
//! - Load the stored profile on start, empty when nothing is stored
//! - Save or remove the profile explicitly
//! - Pluggable storage: in-memory, JSON file, or browser `localStorage`
//!   (`browser` feature)
//!
//! # Example
//!
//! ```no_run
//! use current_user::{CurrentUser, config};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = config::load_config()?;
//!     let store = settings.open_store()?;
//!
//!     let mut user = CurrentUser::with_key(store, settings.storage_key.clone())?;
//!     if !user.is_logged_in() {
//!         user.login("al", "x");
//!         user.save()?;
//!     }
//!     println!("Logged in as {}", user.profile().username);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod current_user;
pub mod error;
pub mod profile;
pub mod storage;
pub mod utils;

// Re-exports for convenience
pub use current_user::{CurrentUser, USER_KEY, load_profile};
pub use error::{ProfileError, Result};
pub use profile::{Profile, is_logged_in};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
