//! API Key entity and related types

use super::validation::{validate_key_name, KeyNameError};

/// Friendly name of an API key - any non-empty string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyName(String);

impl KeyName {
    /// Create a new KeyName after validation
    pub fn new(name: impl Into<String>) -> Result<Self, KeyNameError> {
        let name = name.into();
        validate_key_name(&name)?;
        Ok(Self(name))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<KeyName> for String {
    fn from(name: KeyName) -> Self {
        name.0
    }
}

impl std::fmt::Display for KeyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered API key: a friendly name bound to an immutable secret
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    name: KeyName,
    secret: String,
}

impl ApiKey {
    pub fn new(name: KeyName, secret: impl Into<String>) -> Self {
        Self {
            name,
            secret: secret.into(),
        }
    }

    pub fn name(&self) -> &KeyName {
        &self.name
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

// Secrets stay out of log output.
impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey")
            .field("name", &self.name)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
