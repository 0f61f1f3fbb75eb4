//! Application state for shared services

use std::sync::Arc;

use crate::domain::api_key::{ApiKeyRepository, KeyName};
use crate::domain::DomainError;
use crate::infrastructure::api_key::{ApiKeyService, CreatedApiKey, InMemoryApiKeyRepository};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub api_key_service: Arc<dyn ApiKeyServiceTrait>,
}

impl AppState {
    pub fn new(api_key_service: Arc<dyn ApiKeyServiceTrait>) -> Self {
        Self { api_key_service }
    }

    /// State backed by a fresh, empty in-memory registry
    pub fn in_memory() -> Self {
        let repository = Arc::new(InMemoryApiKeyRepository::new());
        Self::new(Arc::new(ApiKeyService::new(repository)))
    }
}

/// Trait for API key service operations
#[async_trait::async_trait]
pub trait ApiKeyServiceTrait: Send + Sync {
    async fn create(&self, name: &str) -> Result<CreatedApiKey, DomainError>;
    async fn list(&self) -> Result<Vec<KeyName>, DomainError>;
    async fn delete(&self, name: &str) -> Result<String, DomainError>;
    async fn validate(&self, candidate: Option<&str>) -> Result<bool, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}

fn parse_name(name: &str) -> Result<KeyName, DomainError> {
    KeyName::new(name).map_err(|e| DomainError::validation(e.to_string()))
}

#[async_trait::async_trait]
impl<R: ApiKeyRepository + 'static> ApiKeyServiceTrait for ApiKeyService<R> {
    async fn create(&self, name: &str) -> Result<CreatedApiKey, DomainError> {
        ApiKeyService::create(self, parse_name(name)?).await
    }

    async fn list(&self) -> Result<Vec<KeyName>, DomainError> {
        ApiKeyService::list(self).await
    }

    async fn delete(&self, name: &str) -> Result<String, DomainError> {
        // An empty name can never have been registered
        let name = KeyName::new(name).map_err(|_| DomainError::not_found(name))?;
        ApiKeyService::delete(self, &name).await
    }

    async fn validate(&self, candidate: Option<&str>) -> Result<bool, DomainError> {
        ApiKeyService::validate(self, candidate).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        ApiKeyService::count(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let state = AppState::in_memory();

        let result = state.api_key_service.create("").await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert_eq!(state.api_key_service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_empty_name_is_not_found() {
        let state = AppState::in_memory();

        let result = state.api_key_service.delete("").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_cloned_state_shares_registry() {
        let state = AppState::in_memory();
        let clone = state.clone();

        let created = state.api_key_service.create("alice").await.unwrap();

        assert!(clone
            .api_key_service
            .validate(Some(&created.secret))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_fresh_states_are_isolated() {
        let first = AppState::in_memory();
        let second = AppState::in_memory();

        first.api_key_service.create("alice").await.unwrap();

        assert!(second.api_key_service.list().await.unwrap().is_empty());
    }
}
