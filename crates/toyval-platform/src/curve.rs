//! Flat discount curves and the model that holds them.

use std::collections::HashMap;

use toyval_core::daycounts::{Act365Fixed, DayCount};
use toyval_core::{Currency, Date};

use crate::error::{ModelError, ModelResult};

/// A flat, annually compounded ACT/365F discount curve.
///
/// `DF(d) = (1 + rate)^(-t)` with `t = ACT/365F(anchor, d)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatCurve {
    anchor: Date,
    rate: f64,
}

impl FlatCurve {
    /// Creates a curve.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidRate` unless `1 + rate` is finite and positive.
    pub fn new(anchor: Date, rate: f64) -> ModelResult<Self> {
        let base = 1.0 + rate;
        if !base.is_finite() || base <= 0.0 {
            return Err(ModelError::InvalidRate { rate });
        }
        Ok(Self { anchor, rate })
    }

    /// Reference date.
    pub fn anchor(&self) -> Date {
        self.anchor
    }

    /// The flat rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Discount factor to `date`.
    pub fn discount_factor(&self, date: Date) -> f64 {
        let t = Act365Fixed.year_fraction_f64(self.anchor, date);
        (1.0 + self.rate).powf(-t)
    }
}

/// A collection of discount curves keyed by currency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscountModel {
    curves: HashMap<Currency, FlatCurve>,
}

impl DiscountModel {
    /// An empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this model with `curve` set for `currency`.
    ///
    /// An existing curve for the currency is replaced.
    pub fn with_curve(&self, currency: Currency, curve: FlatCurve) -> Self {
        let mut model = self.clone();
        model.curves.insert(currency, curve);
        model
    }

    /// Curve for a currency.
    pub fn curve(&self, currency: Currency) -> ModelResult<&FlatCurve> {
        self.curves
            .get(&currency)
            .ok_or(ModelError::MissingCurve(currency))
    }

    /// Currencies with a curve, sorted by code.
    pub fn currencies(&self) -> Vec<Currency> {
        let mut currencies: Vec<Currency> = self.curves.keys().copied().collect();
        currencies.sort_by_key(|c| c.code());
        currencies
    }

    /// Number of curves.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Returns true if the model has no curves.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}
