//! API key secret generation
//!
//! Secrets are random UUID v4 strings. `uuid` draws them from the operating
//! system CSPRNG, which gives 122 random bits per key.

use uuid::Uuid;

/// Generator for opaque API key secrets
#[derive(Debug, Clone, Default)]
pub struct SecretGenerator {
    /// Optional prefix prepended to every secret (e.g. "ak_")
    prefix: Option<String>,
}

impl SecretGenerator {
    /// Create a generator producing bare UUID secrets
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a fixed prefix to every generated secret
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Generate a new secret
    pub fn generate(&self) -> String {
        let token = Uuid::new_v4().to_string();

        match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, token),
            None => token,
        }
    }
}
