//! Closed-form valuation.

use rust_decimal::prelude::ToPrimitive;

use crate::curve::DiscountModel;
use crate::error::{ModelError, ModelResult};
use crate::product::SingleCashflow;

/// Present value of a single cashflow: `sign × notional × DF(payment date)`.
pub fn closed_form_pv(model: &DiscountModel, product: &SingleCashflow) -> ModelResult<f64> {
    let curve = model.curve(product.currency)?;
    let notional = product
        .notional
        .to_f64()
        .ok_or_else(|| ModelError::NotionalOutOfRange(product.notional.to_string()))?;

    let df = curve.discount_factor(product.payment_date);
    if !df.is_finite() {
        return Err(ModelError::NonFiniteDiscountFactor {
            date: product.payment_date,
        });
    }

    Ok(product.direction.sign() * notional * df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::FlatCurve;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;
    use toyval_core::{Currency, Date, Direction};

    fn today() -> Date {
        Date::from_ymd(2025, 1, 15).unwrap()
    }

    fn usd_model(rate: f64) -> DiscountModel {
        DiscountModel::new().with_curve(Currency::USD, FlatCurve::new(today(), rate).unwrap())
    }

    #[test]
    fn test_ninety_day_receive() {
        let product = SingleCashflow::new(
            Direction::Receive,
            dec!(1000000),
            Currency::USD,
            today().add_days(90),
        );
        let pv = closed_form_pv(&usd_model(0.01), &product).unwrap();
        assert_eq!((pv * 100.0).round() / 100.0, 997_549.50);
    }

    #[test]
    fn test_pay_is_negative() {
        let receive = SingleCashflow::new(Direction::Receive, dec!(250), Currency::USD, today().add_days(400));
        let pay = SingleCashflow { direction: Direction::Pay, ..receive };
        let model = usd_model(0.05);
        assert_relative_eq!(
            closed_form_pv(&model, &pay).unwrap(),
            -closed_form_pv(&model, &receive).unwrap()
        );
    }

    #[test]
    fn test_missing_curve() {
        let product = SingleCashflow::new(Direction::Receive, dec!(1), Currency::GBP, today());
        assert_eq!(
            closed_form_pv(&usd_model(0.01), &product).unwrap_err(),
            ModelError::MissingCurve(Currency::GBP)
        );
    }
}
