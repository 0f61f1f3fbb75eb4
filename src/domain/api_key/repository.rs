//! API Key repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{ApiKey, KeyName};
use crate::domain::DomainError;

/// Repository trait for the key registry
///
/// Every method is a single atomic step: implementations must not let a
/// concurrent caller observe a half-applied insert or removal.
#[async_trait]
pub trait ApiKeyRepository: Send + Sync + Debug {
    /// Insert a new key. Fails with `DuplicateName` if the name is taken.
    async fn insert(&self, api_key: ApiKey) -> Result<ApiKey, DomainError>;

    /// Remove a key, returning the removed record if it existed
    async fn remove(&self, name: &KeyName) -> Result<Option<ApiKey>, DomainError>;

    /// All registered names in insertion order
    async fn names(&self) -> Result<Vec<KeyName>, DomainError>;

    /// Whether any stored key carries this exact secret
    async fn contains_secret(&self, secret: &str) -> Result<bool, DomainError>;

    /// Number of registered keys
    async fn count(&self) -> Result<usize, DomainError>;
}
