//! Input contracts checked before anything is sent to the Platform.
//!
//! Only the shape of the inputs is checked here. Whether a tenor or a
//! convention name means anything is for the Platform to decide.

use thiserror::Error;

use toyval_core::MaturitySpec;

/// Input rejected locally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Rate is NaN or infinite
    #[error("rate must be a finite number, got {0}")]
    NonFiniteRate(f64),

    /// Tenor text is empty
    #[error("maturity tenor must not be empty")]
    EmptyTenor,
}

/// Checks the rate is a real number.
pub fn check_rate(rate: f64) -> Result<(), ValidationError> {
    if rate.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFiniteRate(rate))
    }
}

/// Checks the maturity is a date or a non-empty tenor.
pub fn check_maturity(maturity: &MaturitySpec) -> Result<(), ValidationError> {
    match maturity {
        MaturitySpec::Tenor(text) if text.trim().is_empty() => Err(ValidationError::EmptyTenor),
        _ => Ok(()),
    }
}
