//! Custom error types for the current-user store.
//!
//! Absence of a stored profile is the normal logged-out state and is never
//! reported through these types. Errors come from the persistence provider,
//! the config file, or invalid user input.

use thiserror::Error;

/// Main error type for profile store operations.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// No platform configuration directory could be determined.
    #[error("Could not find config directory")]
    ConfigDirNotFound,

    /// The persistence provider failed to read or write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Generic invalid input error.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for profile store operations.
pub type Result<T> = std::result::Result<T, ProfileError>;
