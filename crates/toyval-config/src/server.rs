//! Reference Platform server settings.

use serde::{Deserialize, Serialize};

use crate::error::{Validate, ValidationError};

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Bearer token required on evaluate requests. Unset means no auth.
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_key: None,
        }
    }
}

impl ServerConfig {
    /// `host:port` to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.host.trim().is_empty() {
            errors.push(ValidationError::new("server.host", "must not be empty"));
        }
        if self.api_key.as_deref().is_some_and(|k| k.is_empty()) {
            errors.push(ValidationError::new(
                "server.api_key",
                "must not be empty; omit it to disable auth",
            ));
        }
        errors
    }
}
