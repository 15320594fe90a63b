//! Products the Platform can value.

use rust_decimal::Decimal;

use toyval_core::{Currency, Date, Direction};

/// One fixed cashflow on a known date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleCashflow {
    /// Whether the holder receives or pays the amount.
    pub direction: Direction,
    /// Amount.
    pub notional: Decimal,
    /// Currency of the amount.
    pub currency: Currency,
    /// When it is paid.
    pub payment_date: Date,
}

impl SingleCashflow {
    /// Creates a cashflow.
    pub fn new(direction: Direction, notional: Decimal, currency: Currency, payment_date: Date) -> Self {
        Self {
            direction,
            notional,
            currency,
            payment_date,
        }
    }
}
