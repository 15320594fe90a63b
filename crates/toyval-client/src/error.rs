//! Valuation error types.

use thiserror::Error;

use toyval_graph::GraphError;
use toyval_traits::PlatformError;

use crate::validation::ValidationError;

/// Result alias for valuation calls.
pub type ValuationResult<T> = Result<T, ValuationError>;

/// Error returned by [`ValuationClient`](crate::ValuationClient).
#[derive(Debug, Error)]
pub enum ValuationError {
    /// Inputs rejected before any remote call
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The graph could not be serialized or submitted
    #[error("graph error: {0}")]
    Graph(String),

    /// Error raised by the Platform client, unchanged
    #[error(transparent)]
    Remote(#[from] PlatformError),

    /// The Platform's answer has no number at the expected position
    #[error("unexpected result shape: no number at row {row}, column {column} ({found})")]
    ResultShape {
        /// Row read
        row: usize,
        /// Column read
        column: usize,
        /// What was found there
        found: String,
    },
}

impl ValuationError {
    /// The Platform error, if this came from the Platform.
    pub fn as_remote(&self) -> Option<&PlatformError> {
        match self {
            ValuationError::Remote(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for ValuationError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::Platform(remote) => ValuationError::Remote(remote),
            other => ValuationError::Graph(other.to_string()),
        }
    }
}
