pub mod parsing;

// Re-export commonly used items
pub use parsing::{mask_secret, parse_credentials};
