//! Model construction and pricing errors.

use thiserror::Error;

use toyval_core::{Currency, Date};

/// Result alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while building models or pricing products.
///
/// The evaluator attaches the failing node's name when turning these into a
/// [`PlatformError`](toyval_traits::PlatformError).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Rate is not a usable annually compounded rate
    #[error("invalid rate {rate}: 1 + rate must be finite and positive")]
    InvalidRate {
        /// The rate
        rate: f64,
    },

    /// The model has no curve for a currency
    #[error("no discount curve for {0}")]
    MissingCurve(Currency),

    /// Notional cannot be represented as a float
    #[error("notional out of range: {0}")]
    NotionalOutOfRange(String),

    /// Discount factor is not finite
    #[error("discount factor at {date} is not finite")]
    NonFiniteDiscountFactor {
        /// Payment date
        date: Date,
    },
}
