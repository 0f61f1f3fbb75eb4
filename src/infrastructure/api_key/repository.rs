//! In-memory API key repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::api_key::{ApiKey, ApiKeyRepository, KeyName};
use crate::domain::DomainError;

/// Registry state. Kept in one struct so a single lock covers the name map,
/// the secret index and the insertion order together.
#[derive(Debug, Default)]
struct KeyTable {
    keys: HashMap<String, ApiKey>,
    /// secret -> name
    secret_index: HashMap<String, String>,
    order: Vec<String>,
}

/// In-memory implementation of ApiKeyRepository
#[derive(Debug, Clone, Default)]
pub struct InMemoryApiKeyRepository {
    table: Arc<RwLock<KeyTable>>,
}

impl InMemoryApiKeyRepository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApiKeyRepository for InMemoryApiKeyRepository {
    async fn insert(&self, api_key: ApiKey) -> Result<ApiKey, DomainError> {
        let mut table = self.table.write().await;

        let name = api_key.name().as_str().to_string();
        let secret = api_key.secret().to_string();

        if table.keys.contains_key(&name) {
            return Err(DomainError::duplicate_name(name));
        }

        if table.secret_index.contains_key(&secret) {
            return Err(DomainError::internal(
                "Generated secret collides with an existing API key",
            ));
        }

        table.secret_index.insert(secret, name.clone());
        table.order.push(name.clone());
        table.keys.insert(name, api_key.clone());

        Ok(api_key)
    }

    async fn remove(&self, name: &KeyName) -> Result<Option<ApiKey>, DomainError> {
        let mut table = self.table.write().await;

        let Some(key) = table.keys.remove(name.as_str()) else {
            return Ok(None);
        };

        table.secret_index.remove(key.secret());
        table.order.retain(|n| n != name.as_str());

        Ok(Some(key))
    }

    async fn names(&self) -> Result<Vec<KeyName>, DomainError> {
        let table = self.table.read().await;

        Ok(table
            .order
            .iter()
            .filter_map(|n| table.keys.get(n))
            .map(|k| k.name().clone())
            .collect())
    }

    async fn contains_secret(&self, secret: &str) -> Result<bool, DomainError> {
        let table = self.table.read().await;
        Ok(table.secret_index.contains_key(secret))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let table = self.table.read().await;
        Ok(table.keys.len())
    }
}
