//! Client-side settings: where the Platform is and how to reach it.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Validate, ValidationError};

/// Default environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "TOYVAL_API_KEY";

/// How a client reaches the Platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    /// In-process reference Platform.
    Local,
    /// HTTP endpoint.
    Http {
        /// Base URL, e.g. `http://localhost:8080`.
        endpoint: String,
    },
}

/// Client configuration.
///
/// Retries are never performed. A request waits indefinitely unless
/// `timeout_ms` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Platform base URL. Unset means the in-process Platform.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Name of the environment variable holding the bearer token
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Request timeout in milliseconds
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    /// Maturity convention used when a caller names none
    #[serde(default = "default_convention")]
    pub default_convention: String,
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_convention() -> String {
    "NewYorkModFoll".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key_env: default_api_key_env(),
            timeout_ms: None,
            default_convention: default_convention(),
        }
    }
}

impl ClientConfig {
    /// Selected transport.
    pub fn transport(&self) -> Transport {
        match &self.endpoint {
            Some(endpoint) => Transport::Http {
                endpoint: endpoint.trim_end_matches('/').to_string(),
            },
            None => Transport::Local,
        }
    }

    /// Configured timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Reads the API key from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if let Some(endpoint) = &self.endpoint {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                errors.push(ValidationError::new(
                    "client.endpoint",
                    format!("'{endpoint}' must start with http:// or https://"),
                ));
            }
        }
        if self.timeout_ms == Some(0) {
            errors.push(ValidationError::new(
                "client.timeout_ms",
                "must be positive; omit it to disable the timeout",
            ));
        }
        if self.api_key_env.trim().is_empty() {
            errors.push(ValidationError::new("client.api_key_env", "must not be empty"));
        }
        if self.default_convention.trim().is_empty() {
            errors.push(ValidationError::new(
                "client.default_convention",
                "must not be empty",
            ));
        }

        errors
    }
}
