//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routes, layers)
//!     → middleware.rs (path gate, credential extraction)
//!     → handler (status endpoint or guarded catch-all)
//!     → Send to client
//! ```

pub mod middleware;
pub mod server;

pub use middleware::{auth_gate_middleware, CurrentUser, GateState};
pub use server::HttpServer;
