//! API middleware components

pub mod auth;
pub mod logging;
pub mod security;

pub use auth::{RequireApiKey, API_KEY_HEADER};
pub use logging::logging_middleware;
pub use security::security_headers_middleware;
