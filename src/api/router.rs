use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::access;
use super::health;
use super::keys;
use super::middleware::{logging_middleware, security_headers_middleware};
use super::state::AppState;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Key management
        .route("/create-key", post(keys::create_key))
        .route("/list-keys", get(keys::list_keys))
        .route("/delete-key/{name}", delete(keys::delete_key))
        // Access demo
        .route("/public", get(access::public))
        .route("/protected", get(access::protected))
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
