//! Authentication gate demo server.
//!
//! A small gateway built with Tokio and Axum that fronts a backend with a
//! path-based authentication gate.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────┐
//!                    │                AUTH GATE                  │
//!                    │                                           │
//!  Client Request    │  ┌─────────┐   ┌────────────┐            │
//!  ──────────────────┼─▶│  http   │──▶│ gate       │            │
//!                    │  │ server  │   │ middleware │            │
//!                    │  └─────────┘   └─────┬──────┘            │
//!                    │                      │                    │
//!                    │            excluded? │ credentials?       │
//!                    │                      ▼                    │
//!                    │               ┌────────────┐             │
//!  Client Response   │               │  handlers  │             │
//!  ◀─────────────────┼───────────────│ (or 401)   │             │
//!                    │               └────────────┘             │
//!                    │                                           │
//!                    │  ┌─────────────────────────────────────┐ │
//!                    │  │        Cross-Cutting Concerns       │ │
//!                    │  │  ┌────────┐ ┌──────────────────┐    │ │
//!                    │  │  │ config │ │  observability   │    │ │
//!                    │  │  └────────┘ └──────────────────┘    │ │
//!                    │  └─────────────────────────────────────┘ │
//!                    └───────────────────────────────────────────┘
//! ```

use std::env;
use std::path::PathBuf;

use tokio::net::TcpListener;

use auth_gate::config::loader;
use auth_gate::http::HttpServer;
use auth_gate::observability::logging;

/// Environment variable naming the config file to load.
const CONFIG_PATH_ENV: &str = "AUTH_GATE_CONFIG";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration: file if named, defaults otherwise. Environment
    // overrides (SESSION_NAME) apply in both cases.
    let config = match env::var(CONFIG_PATH_ENV).map(PathBuf::from) {
        Ok(path) => loader::load_config(&path)?,
        Err(_) => loader::default_config(),
    };

    logging::init(&config.observability.log_level);

    tracing::info!("auth-gate v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        excluded_paths = ?config.auth.excluded_paths,
        session_cookie = ?config.auth.session_cookie_name,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
