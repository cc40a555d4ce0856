//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (gate, tracing, timeout)
//! - Bind server to listener
//! - Serve the status endpoint and the guarded catch-all

use std::sync::Arc;
use std::time::Duration;

use axum::{
    response::IntoResponse,
    routing::{any, get},
    Extension, Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::auth::gate::PathGate;
use crate::auth::resolver::NullResolver;
use crate::config::GateConfig;
use crate::http::middleware::{auth_gate_middleware, CurrentUser, GateState};

/// HTTP server for the authentication gate.
pub struct HttpServer {
    router: Router,
    config: GateConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GateConfig) -> Self {
        let state = GateState {
            gate: Arc::new(PathGate::new(config.auth.excluded_paths.clone())),
            session_cookie_name: config.auth.session_cookie_name.clone(),
            resolver: Arc::new(NullResolver),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GateConfig, state: GateState) -> Router {
        Router::new()
            .route("/api/v1/status", get(status_handler))
            .route("/{*path}", any(guarded_handler))
            .route("/", any(guarded_handler))
            .layer(axum::middleware::from_fn_with_state(
                state,
                auth_gate_middleware,
            ))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Consume the server, returning the router. Used by tests to drive
    /// requests without binding a socket.
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Unauthenticated status endpoint.
async fn status_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Catch-all handler behind the gate.
///
/// Reports whether the gate resolved a user. The extension is absent on
/// excluded paths, since the gate never ran credential extraction there.
async fn guarded_handler(current_user: Option<Extension<CurrentUser>>) -> impl IntoResponse {
    let user = current_user.and_then(|Extension(CurrentUser(user))| user);
    Json(json!({ "user": user }))
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
