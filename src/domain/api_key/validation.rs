//! API key name validation

use thiserror::Error;

/// Errors that can occur while validating a friendly key name
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KeyNameError {
    #[error("API key name cannot be empty")]
    Empty,
}

/// Validate a friendly key name
///
/// The only rule is that the name holds at least one character. Whitespace and
/// punctuation are accepted as-is.
pub fn validate_key_name(name: &str) -> Result<(), KeyNameError> {
    if name.is_empty() {
        return Err(KeyNameError::Empty);
    }

    Ok(())
}
