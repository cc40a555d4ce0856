//! Authentication subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → gate.rs (does this path require auth?)
//!     → credentials.rs (extract Authorization header / session cookie)
//!     → resolver.rs (map credentials to a user — stubbed)
//!     → Pass decision to the gate middleware
//! ```
//!
//! # Design Decisions
//! - The gate is a pure function over strings; it never touches the request
//! - Credential accessors never fail; absence degrades to `None`
//! - User resolution sits behind a trait so real backends can slot in later

pub mod credentials;
pub mod gate;
pub mod resolver;

pub use credentials::{authorization_header, session_cookie};
pub use gate::{requires_auth, PathGate};
pub use resolver::{CredentialResolver, NullResolver, User};
