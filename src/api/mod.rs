//! API layer - HTTP endpoints and middleware

pub mod access;
pub mod health;
pub mod keys;
pub mod middleware;
pub mod router;
pub mod state;
pub mod types;

pub use middleware::RequireApiKey;
pub use router::create_router;
pub use state::AppState;
