//! Infrastructure layer - registry storage, secret generation and logging

pub mod api_key;
pub mod logging;
