//! Configuration loading from disk and the environment.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::GateConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming the session cookie, overriding the file.
pub const SESSION_NAME_ENV: &str = "SESSION_NAME";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
///
/// Environment overrides are applied after parsing, before validation.
pub fn load_config(path: &Path) -> Result<GateConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let mut config: GateConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Build a configuration without a file: defaults plus environment overrides.
pub fn default_config() -> GateConfig {
    let mut config = GateConfig::default();
    apply_env_overrides(&mut config);
    config
}

/// Apply environment overrides to a parsed configuration.
///
/// `SESSION_NAME` takes precedence over `auth.session_cookie_name`.
fn apply_env_overrides(config: &mut GateConfig) {
    if let Ok(name) = env::var(SESSION_NAME_ENV) {
        config.auth.session_cookie_name = Some(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_minimal_config() {
        let toml = r#"
            [listener]
            bind_address = "127.0.0.1:9000"

            [auth]
            session_cookie_name = "_session"
            excluded_paths = ["/api/v1/status", "/api/v1/users/*"]
        "#;
        let config: GateConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.auth.session_cookie_name.as_deref(), Some("_session"));
        assert_eq!(config.auth.excluded_paths.len(), 2);
        // Unspecified sections fall back to defaults.
        assert_eq!(config.observability.log_level, "info");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: GateConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
        assert!(config.auth.session_cookie_name.is_none());
        assert_eq!(config.auth.excluded_paths, vec!["/api/v1/status"]);
    }
}
