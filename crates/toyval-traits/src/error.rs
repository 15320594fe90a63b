//! Errors raised by a Platform or by the transport in front of it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use toyval_core::CoreError;

/// Error returned by [`PlatformClient::evaluate`](crate::PlatformClient::evaluate).
///
/// Serializable so that an HTTP front-end can hand the exact error back to a
/// remote client.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum PlatformError {
    /// Connection to the Platform failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Credentials were rejected
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The configured deadline passed before a response arrived
    #[error("timeout")]
    Timeout,

    /// The submitted document is not a well-formed graph
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// A maturity convention name the Platform does not know
    #[error("unknown maturity convention: {0}")]
    UnknownConvention(String),

    /// A tenor the Platform cannot parse
    #[error("malformed tenor: {0}")]
    MalformedTenor(String),

    /// A node failed while being computed
    #[error("computation failed at {node}: {reason}")]
    Computation {
        /// Object name of the failing node
        node: String,
        /// What went wrong
        reason: String,
    },

    /// Encoding or decoding the wire format failed
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl PlatformError {
    /// Creates a computation error for a node.
    pub fn computation(node: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Computation {
            node: node.into(),
            reason: reason.into(),
        }
    }

    /// Maps a core error raised while computing `node`.
    pub fn from_core(node: &str, error: CoreError) -> Self {
        match error {
            CoreError::UnknownConvention { name } => Self::UnknownConvention(name),
            CoreError::MalformedTenor { input, reason } => {
                Self::MalformedTenor(format!("'{input}': {reason}"))
            }
            other => Self::computation(node, other.to_string()),
        }
    }
}

/// JSON body carrying a [`PlatformError`] over HTTP: `{"error": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// The error.
    pub error: PlatformError,
}

impl From<PlatformError> for ErrorBody {
    fn from(error: PlatformError) -> Self {
        Self { error }
    }
}

impl From<serde_json::Error> for PlatformError {
    fn from(e: serde_json::Error) -> Self {
        PlatformError::Serialization(e.to_string())
    }
}
