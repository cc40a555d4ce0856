//! Authentication Gate Library
//!
//! Decides per request whether a path requires authentication, extracts
//! candidate credentials (Authorization header, session cookie), and hands
//! them to a pluggable current-user resolver.

pub mod auth;
pub mod config;
pub mod http;
pub mod observability;

pub use auth::gate::{requires_auth, PathGate};
pub use config::schema::GateConfig;
pub use http::HttpServer;
