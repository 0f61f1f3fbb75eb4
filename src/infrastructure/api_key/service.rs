//! API Key service
//!
//! Provides the registry operations used by the HTTP layer: create, list,
//! delete and validate.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::api_key::{ApiKey, ApiKeyRepository, KeyName};
use crate::domain::DomainError;

use super::generator::SecretGenerator;

/// Result of creating a new API key
#[derive(Debug, Clone)]
pub struct CreatedApiKey {
    pub name: KeyName,
    /// The secret, exposed only at creation time
    pub secret: String,
}

/// API Key service for managing the key registry
#[derive(Debug)]
pub struct ApiKeyService<R>
where
    R: ApiKeyRepository,
{
    repository: Arc<R>,
    generator: SecretGenerator,
}

impl<R: ApiKeyRepository> ApiKeyService<R> {
    /// Create a new API key service
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            generator: SecretGenerator::new(),
        }
    }

    /// Create with a custom generator
    pub fn with_generator(mut self, generator: SecretGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Issue a new key under `name`
    pub async fn create(&self, name: KeyName) -> Result<CreatedApiKey, DomainError> {
        info!(name = %name, "Creating API key");

        let secret = self.generator.generate();
        let created = self
            .repository
            .insert(ApiKey::new(name, secret))
            .await?;

        info!(name = %created.name(), "API key created");

        Ok(CreatedApiKey {
            name: created.name().clone(),
            secret: created.secret().to_string(),
        })
    }

    /// List registered names; secrets are never returned
    pub async fn list(&self) -> Result<Vec<KeyName>, DomainError> {
        let names = self.repository.names().await?;
        debug!(count = names.len(), "Listed API key names");
        Ok(names)
    }

    /// Delete the key registered under `name`
    pub async fn delete(&self, name: &KeyName) -> Result<String, DomainError> {
        info!(name = %name, "Deleting API key");

        self.repository
            .remove(name)
            .await?
            .ok_or_else(|| DomainError::not_found(name.as_str()))?;

        info!(name = %name, "API key deleted");

        Ok(format!("Deleted API key for '{}'", name))
    }

    /// Check whether a presented secret belongs to any registered key
    pub async fn validate(&self, candidate: Option<&str>) -> Result<bool, DomainError> {
        let Some(candidate) = candidate else {
            debug!("No API key presented");
            return Ok(false);
        };

        let valid = self.repository.contains_secret(candidate).await?;
        debug!(valid, "Validated API key");

        Ok(valid)
    }

    /// Number of registered keys
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::api_key::mock::MockApiKeyRepository;
    use crate::infrastructure::api_key::InMemoryApiKeyRepository;

    fn create_service() -> ApiKeyService<InMemoryApiKeyRepository> {
        ApiKeyService::new(Arc::new(InMemoryApiKeyRepository::new()))
    }

    fn name(value: &str) -> KeyName {
        KeyName::new(value).unwrap()
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let service = create_service();

        let created = service.create(name("alice")).await.unwrap();
        assert_eq!(created.name.as_str(), "alice");
        assert!(!created.secret.is_empty());

        let names = service.list().await.unwrap();
        assert_eq!(names, vec![name("alice")]);
    }

    #[tokio::test]
    async fn test_create_duplicate_keeps_original_secret() {
        let service = create_service();

        let first = service.create(name("alice")).await.unwrap();
        let second = service.create(name("alice")).await;

        assert!(matches!(second, Err(DomainError::DuplicateName { .. })));
        assert!(service.validate(Some(&first.secret)).await.unwrap());
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_validate_issued_secret() {
        let service = create_service();
        let created = service.create(name("alice")).await.unwrap();

        assert!(service.validate(Some(&created.secret)).await.unwrap());
        assert!(!service.validate(Some("never-issued")).await.unwrap());
        assert!(!service.validate(Some("")).await.unwrap());
        assert!(!service.validate(None).await.unwrap());
    }

    #[tokio::test]
    async fn test_validate_any_key_grants_access() {
        let service = create_service();
        let alice = service.create(name("alice")).await.unwrap();
        let bob = service.create(name("bob")).await.unwrap();

        assert_ne!(alice.secret, bob.secret);
        assert!(service.validate(Some(&alice.secret)).await.unwrap());
        assert!(service.validate(Some(&bob.secret)).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_revokes_secret() {
        let service = create_service();
        let created = service.create(name("alice")).await.unwrap();

        let message = service.delete(&name("alice")).await.unwrap();
        assert_eq!(message, "Deleted API key for 'alice'");

        assert!(service.list().await.unwrap().is_empty());
        assert!(!service.validate(Some(&created.secret)).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_leaves_registry_unchanged() {
        let service = create_service();
        let created = service.create(name("alice")).await.unwrap();

        let result = service.delete(&name("bob")).await;
        assert!(matches!(result, Err(DomainError::NotFound { ref name }) if name == "bob"));

        assert_eq!(service.list().await.unwrap(), vec![name("alice")]);
        assert!(service.validate(Some(&created.secret)).await.unwrap());
    }

    #[tokio::test]
    async fn test_recreate_after_delete_issues_new_secret() {
        let service = create_service();

        let first = service.create(name("alice")).await.unwrap();
        service.delete(&name("alice")).await.unwrap();
        let second = service.create(name("alice")).await.unwrap();

        assert_ne!(first.secret, second.secret);
        assert!(!service.validate(Some(&first.secret)).await.unwrap());
        assert!(service.validate(Some(&second.secret)).await.unwrap());
    }

    #[tokio::test]
    async fn test_custom_generator() {
        let service = create_service().with_generator(SecretGenerator::new().with_prefix("ak_"));

        let created = service.create(name("alice")).await.unwrap();
        assert!(created.secret.starts_with("ak_"));
        assert!(service.validate(Some(&created.secret)).await.unwrap());
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let repo = Arc::new(MockApiKeyRepository::new());
        let service = ApiKeyService::new(repo.clone());

        service.create(name("alice")).await.unwrap();
        repo.set_should_fail(true).await;

        assert!(matches!(
            service.create(name("bob")).await,
            Err(DomainError::Storage { .. })
        ));
        assert!(matches!(service.list().await, Err(DomainError::Storage { .. })));
        assert!(matches!(
            service.validate(Some("anything")).await,
            Err(DomainError::Storage { .. })
        ));
        // Absent candidates never reach storage
        assert!(!service.validate(None).await.unwrap());
    }
}
