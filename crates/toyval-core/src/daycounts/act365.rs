//! Actual/365 Fixed.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// Actual/365 Fixed day count convention.
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(365)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    fn year_fraction_f64(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 365.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_full_year_non_leap() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();

        assert_eq!(dc.day_count(start, end), 365);
        assert_eq!(dc.year_fraction(start, end), dec!(1));
    }

    #[test]
    fn test_full_year_leap() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();

        assert_eq!(dc.day_count(start, end), 366);
        assert_eq!(dc.year_fraction(start, end), dec!(366) / dec!(365));
    }

    #[test]
    fn test_ninety_days() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2025, 10, 18).unwrap();
        let end = start.add_days(90);

        assert_relative_eq!(dc.year_fraction_f64(start, end), 90.0 / 365.0);
    }

    #[test]
    fn test_negative_period() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2025, 6, 15).unwrap();

        assert_eq!(dc.year_fraction(start, start), dec!(0));
        assert!(dc.year_fraction_f64(start, start.add_days(-10)) < 0.0);
    }
}
