//! API key authentication extractor

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::DomainError;

/// Header carrying the API key. `HeaderMap` lookups are case-insensitive.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Extractor that requires a valid API key in the `X-API-Key` header
///
/// Any registered secret is accepted, whichever name it was issued under.
/// Holds the presented secret.
#[derive(Debug, Clone)]
pub struct RequireApiKey(pub String);

impl FromRequestParts<AppState> for RequireApiKey {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let candidate = extract_api_key_from_headers(&parts.headers);

        let valid = state
            .api_key_service
            .validate(candidate)
            .await
            .map_err(ApiError::from)?;

        match candidate {
            Some(key) if valid => Ok(RequireApiKey(key.to_string())),
            _ => {
                debug!(present = candidate.is_some(), "Rejected API key");
                Err(DomainError::Unauthorized.into())
            }
        }
    }
}

/// Read the `X-API-Key` header. A value that is not valid visible ASCII is
/// treated the same as a missing header.
fn extract_api_key_from_headers(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderName, HeaderValue, Request, StatusCode};

    #[test]
    fn test_extract_x_api_key() {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", "key-67890".parse().unwrap());

        assert_eq!(extract_api_key_from_headers(&headers), Some("key-67890"));
    }

    #[test]
    fn test_extract_header_name_case_insensitive() {
        let mut headers = HeaderMap::new();
        let name = HeaderName::from_bytes(b"X-API-KEY").unwrap();
        headers.insert(name, "key-1".parse().unwrap());

        assert_eq!(extract_api_key_from_headers(&headers), Some("key-1"));
    }

    #[test]
    fn test_missing_api_key() {
        let headers = HeaderMap::new();
        assert_eq!(extract_api_key_from_headers(&headers), None);
    }

    #[test]
    fn test_authorization_header_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer key-1".parse().unwrap());

        assert_eq!(extract_api_key_from_headers(&headers), None);
    }

    #[test]
    fn test_non_ascii_header_value() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-api-key",
            HeaderValue::from_bytes(&[0xfa, 0xfb]).unwrap(),
        );

        assert_eq!(extract_api_key_from_headers(&headers), None);
    }

    async fn extract(state: &AppState, key: Option<&str>) -> Result<RequireApiKey, ApiError> {
        let mut builder = Request::builder().uri("/protected");
        if let Some(key) = key {
            builder = builder.header("X-API-Key", key);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();

        RequireApiKey::from_request_parts(&mut parts, state).await
    }

    #[tokio::test]
    async fn test_valid_key_accepted() {
        let state = AppState::in_memory();
        let created = state.api_key_service.create("alice").await.unwrap();

        let RequireApiKey(key) = extract(&state, Some(&created.secret)).await.unwrap();
        assert_eq!(key, created.secret);
    }

    #[tokio::test]
    async fn test_unknown_key_rejected() {
        let state = AppState::in_memory();
        state.api_key_service.create("alice").await.unwrap();

        let err = extract(&state, Some("not-a-key")).await.unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.detail(), "Invalid or missing API key");
    }

    #[tokio::test]
    async fn test_missing_key_rejected() {
        let state = AppState::in_memory();

        let err = extract(&state, None).await.unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.detail(), "Invalid or missing API key");
    }
}
