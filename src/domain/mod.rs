//! Domain layer - Core business logic and entities

pub mod api_key;
pub mod error;

pub use api_key::{ApiKey, ApiKeyRepository, KeyName, KeyNameError};
pub use error::DomainError;
