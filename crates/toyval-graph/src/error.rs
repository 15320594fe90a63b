//! Graph error types.

use thiserror::Error;

use toyval_traits::PlatformError;

/// Result alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised while serializing or submitting a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Two distinct nodes in one graph share an object name
    #[error("invalid document: duplicate object name '{0}'")]
    DuplicateName(String),

    /// Circular dependency
    #[error("invalid document: circular dependency detected")]
    CircularDependency,

    /// The blocking wait could not drive the request
    #[error("runtime error: {0}")]
    Runtime(String),

    /// Error raised by the Platform client, passed through as-is
    #[error(transparent)]
    Platform(#[from] PlatformError),
}
