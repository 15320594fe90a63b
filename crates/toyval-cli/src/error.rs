//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// The demonstration produced an unexpected value.
    #[error("Demo check failed: {0}")]
    DemoCheck(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
