//! Parsing and formatting helpers for CLI input and output.

use crate::error::{ProfileError, Result};

// =============================================================================
// Credentials
// =============================================================================

/// Parse a `username:password` pair.
///
/// # Arguments
/// * `input` - Credentials as given on the command line
///
/// # Returns
/// Tuple of (username, password). The username is trimmed and may not be
/// empty; the password is everything after the first `:` and may be empty.
///
/// # Example
/// ```
/// use current_user::utils::parsing::parse_credentials;
///
/// let (user, pass) = parse_credentials("al:x").unwrap();
/// assert_eq!(user, "al");
/// assert_eq!(pass, "x");
/// ```
pub fn parse_credentials(input: &str) -> Result<(String, String)> {
    let (user, pass) = input.split_once(':').ok_or_else(|| {
        ProfileError::InvalidInput(format!("Expected username:password, got '{}'", input))
    })?;

    let user = user.trim();
    if user.is_empty() {
        return Err(ProfileError::InvalidInput("Username cannot be empty".into()));
    }

    Ok((user.to_string(), pass.to_string()))
}

// =============================================================================
// Display
// =============================================================================

/// Mask a secret for display, keeping at most the first four characters.
///
/// Short secrets are fully masked.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count == 0 {
        return String::new();
    }
    if count <= 8 {
        return "*".repeat(count);
    }
    let head: String = secret.chars().take(4).collect();
    format!("{}{}", head, "*".repeat(count - 4))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_credentials() {
        assert_eq!(
            parse_credentials("al:x").unwrap(),
            ("al".to_string(), "x".to_string())
        );
        assert_eq!(
            parse_credentials("al:pa:ss").unwrap(),
            ("al".to_string(), "pa:ss".to_string())
        );
        assert_eq!(
            parse_credentials("al:").unwrap(),
            ("al".to_string(), String::new())
        );
    }

    #[test]
    fn test_parse_credentials_invalid() {
        assert!(parse_credentials("nocolon").is_err());
        assert!(parse_credentials(":x").is_err());
        assert!(parse_credentials("").is_err());
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(""), "");
        assert_eq!(mask_secret("abc"), "***");
        assert_eq!(mask_secret("YWw6eA=="), "********");
        assert_eq!(mask_secret("YWxpY2U6aHVudGVyMg=="), "YWxp****************");
    }
}
