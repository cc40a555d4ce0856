//! Current-user resolution.
//!
//! # Responsibilities
//! - Define the seam between the gate and a real credential backend
//! - Provide the stub resolver used until one exists
//!
//! # Design Decisions
//! - Resolution is a trait so header-token, cookie-session, or other schemes
//!   can plug in without touching the gate or the middleware
//! - The stub resolver never identifies anyone; callers must treat `None`
//!   as "no authenticated user", not as an error

use axum::body::Body;
use axum::http::Request;
use serde::Serialize;

/// An authenticated user as seen by downstream handlers.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Stable user identifier.
    pub id: String,
}

/// Resolves the current user from an incoming request.
pub trait CredentialResolver: Send + Sync {
    /// Returns the user the request's credentials identify, if any.
    fn current_user(&self, request: Option<&Request<Body>>) -> Option<User>;
}

/// Resolver that never identifies a user.
///
/// Placeholder until a real session or token backend is wired in.
#[derive(Debug, Clone, Default)]
pub struct NullResolver;

impl CredentialResolver for NullResolver {
    fn current_user(&self, _request: Option<&Request<Body>>) -> Option<User> {
        None
    }
}
