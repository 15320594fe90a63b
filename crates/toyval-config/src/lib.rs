//! # Toyval Configuration
//!
//! TOML configuration shared by the `toyval` CLI and the reference Platform
//! server.
//!
//! ```toml
//! [client]
//! endpoint = "http://localhost:8080"   # omit to use the in-process Platform
//! api_key_env = "TOYVAL_API_KEY"
//! timeout_ms = 5000                    # omit for no timeout
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//!
//! [logging]
//! filter = "info,toyval_graph=debug"
//! ```
//!
//! Every section and field is optional. After loading, environment variables
//! override the file:
//!
//! | variable | overrides |
//! |---|---|
//! | `TOYVAL_ENDPOINT` | `client.endpoint` |
//! | `TOYVAL_LOG` | `logging.filter` |
//!
//! The API key itself is never stored in the file; it is read from the
//! variable named by `client.api_key_env` when a client is built.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod error;
pub mod server;

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

pub use client::{ClientConfig, Transport, DEFAULT_API_KEY_ENV};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use server::ServerConfig;

/// Environment variable overriding `client.endpoint`.
pub const ENV_ENDPOINT: &str = "TOYVAL_ENDPOINT";

/// Environment variable overriding `logging.filter`.
pub const ENV_LOG: &str = "TOYVAL_LOG";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToyvalConfig {
    /// Client settings
    #[serde(default)]
    pub client: ClientConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ToyvalConfig {
    /// Loads configuration from a TOML file, without environment overrides.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = content.parse()?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Loads the file if given (defaults otherwise), applies the process
    /// environment, and validates the result.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.validate_or_error()?;
        Ok(config)
    }

    /// Applies overrides from an environment lookup.
    ///
    /// Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            debug!(endpoint = %endpoint, "Endpoint overridden from environment");
            self.client.endpoint = Some(endpoint);
        }
        if let Some(filter) = lookup(ENV_LOG) {
            self.logging.filter = filter;
        }
    }

    /// Serializes back to TOML.
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }
}

impl FromStr for ToyvalConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

impl Validate for ToyvalConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = self.client.validate();
        errors.extend(self.server.validate());
        if self.logging.filter.trim().is_empty() {
            errors.push(ValidationError::new("logging.filter", "must not be empty"));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let config: ToyvalConfig = "".parse().unwrap();
        assert_eq!(config, ToyvalConfig::default());
        assert_eq!(config.client.transport(), Transport::Local);
        assert_eq!(config.client.timeout(), None);
        assert_eq!(config.client.api_key_env, "TOYVAL_API_KEY");
        assert_eq!(config.client.default_convention, "NewYorkModFoll");
        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
        assert!(config.is_valid());
    }

    #[test]
    fn test_parse_full() {
        let config: ToyvalConfig = r#"
            [client]
            endpoint = "http://localhost:9000/"
            timeout_ms = 2500

            [server]
            host = "127.0.0.1"
            port = 9000

            [logging]
            filter = "debug"
        "#
        .parse()
        .unwrap();

        assert_eq!(
            config.client.transport(),
            Transport::Http {
                endpoint: "http://localhost:9000".into()
            }
        );
        assert_eq!(config.client.timeout(), Some(Duration::from_millis(2500)));
        assert_eq!(config.server.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = "[client]\nretries = 3\n".parse::<ToyvalConfig>().unwrap_err();
        assert!(matches!(err, ConfigError::Deserialization(_)));
    }

    #[test]
    fn test_validation() {
        let mut config = ToyvalConfig::default();
        config.client.endpoint = Some("localhost:8080".into());
        config.client.timeout_ms = Some(0);

        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert!(matches!(
            config.validate_or_error(),
            Err(ConfigError::MultipleValidationErrors(_))
        ));

        config.client.timeout_ms = None;
        assert!(matches!(
            config.validate_or_error(),
            Err(ConfigError::Validation { ref field, .. }) if field == "client.endpoint"
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ToyvalConfig::default();
        config.apply_env(|key| match key {
            "TOYVAL_ENDPOINT" => Some("https://platform.example".into()),
            "TOYVAL_LOG" => Some("warn".into()),
            _ => None,
        });
        assert_eq!(config.client.endpoint.as_deref(), Some("https://platform.example"));
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_empty_env_ignored() {
        let mut config = ToyvalConfig::default();
        config.apply_env(|_| Some("  ".into()));
        assert_eq!(config, ToyvalConfig::default());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 7070").unwrap();

        let config = ToyvalConfig::from_file(file.path()).unwrap();
        assert_eq!(config.server.port, 7070);
        assert_eq!(config.client, ClientConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ToyvalConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = ToyvalConfig::default();
        config.client.timeout_ms = Some(100);
        let text = config.to_toml().unwrap();
        assert_eq!(text.parse::<ToyvalConfig>().unwrap(), config);
    }
}
