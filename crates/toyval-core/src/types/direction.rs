//! Cashflow direction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a cashflow is received or paid by the holder.
///
/// Uses the Platform's short codes `"Rec"` and `"Pay"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// The holder receives the cashflow.
    #[serde(rename = "Rec")]
    Receive,
    /// The holder pays the cashflow.
    #[serde(rename = "Pay")]
    Pay,
}

impl Direction {
    /// Sign applied to the cashflow amount.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Receive => 1.0,
            Direction::Pay => -1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Receive => write!(f, "Rec"),
            Direction::Pay => write!(f, "Pay"),
        }
    }
}
