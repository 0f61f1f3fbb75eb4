//! Public and key-protected endpoints

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::middleware::RequireApiKey;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// GET /public
pub async fn public() -> Json<MessageResponse> {
    Json(MessageResponse::new("This is a public endpoint."))
}

/// GET /protected - requires a valid `X-API-Key` header
pub async fn protected(RequireApiKey(_): RequireApiKey) -> Json<MessageResponse> {
    Json(MessageResponse::new("You have access to the protected endpoint!"))
}
