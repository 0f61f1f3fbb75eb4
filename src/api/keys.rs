//! Key management endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Query};

/// Query parameters for POST /create-key
#[derive(Debug, Clone, Deserialize)]
pub struct CreateKeyParams {
    pub name: String,
}

/// Issued key; the only response that ever carries the secret
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateKeyResponse {
    pub name: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListKeysResponse {
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteKeyResponse {
    pub detail: String,
}

/// POST /create-key?name=<name>
pub async fn create_key(
    State(state): State<AppState>,
    Query(params): Query<CreateKeyParams>,
) -> Result<Json<CreateKeyResponse>, ApiError> {
    debug!(name = %params.name, "Creating API key");

    let created = state.api_key_service.create(&params.name).await?;

    Ok(Json(CreateKeyResponse {
        name: created.name.into(),
        api_key: created.secret,
    }))
}

/// GET /list-keys
pub async fn list_keys(State(state): State<AppState>) -> Result<Json<ListKeysResponse>, ApiError> {
    let names = state.api_key_service.list().await?;

    Ok(Json(ListKeysResponse {
        names: names.into_iter().map(String::from).collect(),
    }))
}

/// DELETE /delete-key/{name}
pub async fn delete_key(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DeleteKeyResponse>, ApiError> {
    debug!(name = %name, "Deleting API key");

    let detail = state.api_key_service.delete(&name).await?;

    Ok(Json(DeleteKeyResponse { detail }))
}
