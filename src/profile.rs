//! The current user's login profile.
//!
//! A [`Profile`] holds the username, the password and the opaque
//! authorization token the server hands back. Whether the user counts as
//! logged in is derived from the token alone, see [`is_logged_in`].
//!
//! Records are serialized with the field names the web client uses
//! (`username`, `password`, `authorizationEncoded`), so a profile written by
//! one side can be read by the other.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ProfileError, Result};

// =============================================================================
// Profile
// =============================================================================

/// Login profile of the current user.
///
/// Stored records are read leniently: a missing or `null` field becomes an
/// empty string, and any other non-string value is kept as its JSON text.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    #[serde(deserialize_with = "lenient_string")]
    pub username: String,
    /// Stored as plaintext, same as the web client does.
    #[serde(deserialize_with = "lenient_string")]
    pub password: String,
    /// Opaque token; empty means "no token".
    #[serde(deserialize_with = "lenient_string")]
    pub authorization_encoded: String,
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

impl Profile {
    /// Create a profile from its three fields.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        authorization_encoded: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            authorization_encoded: authorization_encoded.into(),
        }
    }

    /// A profile with every field empty.
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// Return this profile with `username` replaced.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Return this profile with `password` replaced.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Return this profile with the authorization token replaced.
    pub fn with_authorization(mut self, authorization_encoded: impl Into<String>) -> Self {
        self.authorization_encoded = authorization_encoded.into();
        self
    }

    /// Value for an HTTP `Authorization` header, or `None` when logged out.
    pub fn authorization_header(&self) -> Option<String> {
        if is_logged_in(self) {
            Some(format!("Basic {}", self.authorization_encoded))
        } else {
            None
        }
    }
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("username", &self.username)
            .field("password", &format_args!("*** {} bytes ***", self.password.len()))
            .field(
                "authorization_encoded",
                &format_args!("*** {} bytes ***", self.authorization_encoded.len()),
            )
            .finish()
    }
}

/// True iff the profile carries a non-empty authorization token.
///
/// Pure; callers that want the informational log line go through
/// [`crate::CurrentUser::is_logged_in`].
pub fn is_logged_in(profile: &Profile) -> bool {
    !profile.authorization_encoded.is_empty()
}

// =============================================================================
// Basic Authorization
// =============================================================================

/// Encode `username:password` the way HTTP Basic authentication expects.
///
/// # Example
/// ```
/// use current_user::profile::encode_basic_authorization;
///
/// assert_eq!(encode_basic_authorization("al", "x"), "YWw6eA==");
/// ```
pub fn encode_basic_authorization(username: &str, password: &str) -> String {
    STANDARD.encode(format!("{}:{}", username, password))
}

/// Split a Basic token back into `(username, password)`.
///
/// # Arguments
/// * `token` - Base64 of `username:password`, surrounding whitespace ignored
///
/// # Returns
/// Tuple of (username, password). The password is everything after the
/// first `:`, so it may itself contain colons.
///
/// # Errors
/// `ProfileError::InvalidInput` if the token is not base64, not UTF-8, or
/// has no `:` separator.
pub fn decode_basic_authorization(token: &str) -> Result<(String, String)> {
    let bytes = STANDARD
        .decode(token.trim())
        .map_err(|e| ProfileError::InvalidInput(format!("Token is not base64: {}", e)))?;

    let text = String::from_utf8(bytes)
        .map_err(|_| ProfileError::InvalidInput("Token is not valid UTF-8".into()))?;

    text.split_once(':')
        .map(|(user, pass)| (user.to_string(), pass.to_string()))
        .ok_or_else(|| ProfileError::InvalidInput("Token has no ':' separator".into()))
}

// =============================================================================
// Tests
// =============================================================================
