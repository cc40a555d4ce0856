//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check exclusion patterns are well-formed absolute paths
//! - Validate the bind address and timeout values
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GateConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::GateConfig;

/// A single semantic validation failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("bind address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,

    #[error("excluded path must not be empty")]
    EmptyExcludedPath,

    #[error("excluded path {0:?} must start with '/'")]
    RelativeExcludedPath(String),

    #[error("session cookie name must not be empty when set")]
    EmptyCookieName,
}

/// Validate a configuration, collecting every failure.
pub fn validate_config(config: &GateConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    for path in &config.auth.excluded_paths {
        if path.is_empty() {
            errors.push(ValidationError::EmptyExcludedPath);
        } else if !path.starts_with('/') {
            errors.push(ValidationError::RelativeExcludedPath(path.clone()));
        }
    }

    if let Some(name) = &config.auth.session_cookie_name {
        if name.is_empty() {
            errors.push(ValidationError::EmptyCookieName);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
