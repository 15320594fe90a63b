//! Maturity inputs: an explicit date or a symbolic tenor.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreResult;
use crate::types::{Date, Tenor};

/// A maturity as given by a caller.
///
/// The tenor variant carries the raw text: clients forward it untouched and
/// only the resolving side parses it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturitySpec {
    /// An explicit calendar date.
    Date(Date),
    /// A tenor such as `"90d"` relative to the anchor date.
    Tenor(String),
}

impl MaturitySpec {
    /// Creates a tenor maturity.
    pub fn tenor(text: impl Into<String>) -> Self {
        Self::Tenor(text.into())
    }

    /// Returns the unadjusted maturity date relative to `anchor`.
    pub fn unadjusted(&self, anchor: Date) -> CoreResult<Date> {
        match self {
            MaturitySpec::Date(date) => Ok(*date),
            MaturitySpec::Tenor(text) => text.parse::<Tenor>()?.advance(anchor),
        }
    }

    /// Interprets free text: ISO dates become [`MaturitySpec::Date`], anything
    /// else is kept as a tenor.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        match Date::parse(text) {
            Ok(date) => MaturitySpec::Date(date),
            Err(_) => MaturitySpec::Tenor(text.trim().to_string()),
        }
    }
}

impl From<Date> for MaturitySpec {
    fn from(date: Date) -> Self {
        MaturitySpec::Date(date)
    }
}

impl From<Tenor> for MaturitySpec {
    fn from(tenor: Tenor) -> Self {
        MaturitySpec::Tenor(tenor.to_string())
    }
}

impl From<&str> for MaturitySpec {
    fn from(text: &str) -> Self {
        MaturitySpec::from_text(text)
    }
}

impl fmt::Display for MaturitySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaturitySpec::Date(date) => write!(f, "{date}"),
            MaturitySpec::Tenor(text) => write!(f, "{text}"),
        }
    }
}
