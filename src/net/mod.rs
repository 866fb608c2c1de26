//! HTTP client layer: wire types and the session-gated API.

pub mod api;
pub mod types;
