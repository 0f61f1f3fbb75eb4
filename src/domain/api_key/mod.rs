//! API Key domain
//!
//! Domain types and the repository contract for the key registry: a mapping
//! from unique friendly names to opaque secrets.

mod entity;
mod repository;
mod validation;

pub use entity::{ApiKey, KeyName};
pub use repository::ApiKeyRepository;
pub use validation::{validate_key_name, KeyNameError};

#[cfg(test)]
pub use repository::mock;
