//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; events carry the request path
//! - Request traces come from tower-http's TraceLayer on the server

pub mod logging;
