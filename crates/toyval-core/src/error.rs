//! Error types for core date and convention handling.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building or resolving core domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A tenor string that does not follow `<count><unit>`.
    #[error("Malformed tenor '{input}': {reason}")]
    MalformedTenor {
        /// The raw tenor text.
        input: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A maturity convention name that is not recognised.
    #[error("Unknown maturity convention: {name}")]
    UnknownConvention {
        /// The unrecognised name.
        name: String,
    },

    /// Unsupported or unknown currency code.
    #[error("Unknown currency: {code}")]
    UnknownCurrency {
        /// The unrecognised code.
        code: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a malformed tenor error.
    #[must_use]
    pub fn malformed_tenor(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedTenor {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unknown convention error.
    #[must_use]
    pub fn unknown_convention(name: impl Into<String>) -> Self {
        Self::UnknownConvention { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_tenor_error_display() {
        let err = CoreError::malformed_tenor("9x", "unknown unit 'x'");
        assert_eq!(err.to_string(), "Malformed tenor '9x': unknown unit 'x'");
    }

    #[test]
    fn test_convention_error_display() {
        let err = CoreError::unknown_convention("Atlantis");
        assert!(err.to_string().contains("Atlantis"));
    }
}
