//! Route-guard middleware.
//! Enforces the path authorization gate on every request.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::auth::credentials::{authorization_header, session_cookie};
use crate::auth::gate::PathGate;
use crate::auth::resolver::{CredentialResolver, User};

/// State required by the gate middleware.
#[derive(Clone)]
pub struct GateState {
    pub gate: Arc<PathGate>,
    pub session_cookie_name: Option<String>,
    pub resolver: Arc<dyn CredentialResolver>,
}

/// Context attached to requests that passed the gate with credentials.
///
/// The inner user is `None` until a real resolver is wired in; handlers
/// decide what an unresolved user means for them.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub Option<User>);

pub async fn auth_gate_middleware(
    State(state): State<GateState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();

    // 1. Excluded paths pass through untouched.
    if !state.gate.requires_auth(Some(&path)) {
        tracing::debug!(path = %path, "path excluded from authentication");
        return next.run(req).await;
    }

    // 2. Collect candidate credentials.
    let header = authorization_header(Some(&req));
    let cookie = session_cookie(Some(&req), state.session_cookie_name.as_deref());

    if header.is_none() && cookie.is_none() {
        tracing::debug!(path = %path, "rejecting request without credentials");
        return (StatusCode::UNAUTHORIZED, "Authentication required").into_response();
    }

    // 3. Resolve the user and attach the outcome. Whether an unresolved
    //    user is acceptable is the downstream handler's call.
    let user = state.resolver.current_user(Some(&req));
    req.extensions_mut().insert(CurrentUser(user));
    next.run(req).await
}
