//! API Key infrastructure implementations
//!
//! Secret generation, the in-memory registry and the service that ties them
//! together.

mod generator;
mod repository;
mod service;

pub use generator::SecretGenerator;
pub use repository::InMemoryApiKeyRepository;
pub use service::{ApiKeyService, CreatedApiKey};
