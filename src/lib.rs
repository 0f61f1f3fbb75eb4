//! API Key Registry
//!
//! A small HTTP service that issues named API keys and gates a protected
//! endpoint behind the `X-API-Key` header:
//! - `POST /create-key?name=...` issues a secret under a unique name
//! - `GET /list-keys` lists names (never secrets)
//! - `DELETE /delete-key/{name}` revokes a key
//! - `GET /protected` accepts any currently registered secret
//!
//! Keys live in memory only and are lost on restart.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::api_key::{ApiKeyService, InMemoryApiKeyRepository, SecretGenerator};
use tracing::info;

/// Create the application state with an empty in-memory registry
pub fn create_app_state(config: &AppConfig) -> AppState {
    let mut generator = SecretGenerator::new();
    if let Some(prefix) = &config.keys.secret_prefix {
        info!("Generated secrets will use prefix '{}'", prefix);
        generator = generator.with_prefix(prefix);
    }

    let repository = Arc::new(InMemoryApiKeyRepository::new());
    let service = ApiKeyService::new(repository).with_generator(generator);

    AppState::new(Arc::new(service))
}
