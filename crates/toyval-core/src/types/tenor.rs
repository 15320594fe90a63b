//! Symbolic tenors such as `"90d"`, `"3m"` or `"1y"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// Unit of a tenor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenorUnit {
    /// Calendar days.
    Days,
    /// Weeks of seven calendar days.
    Weeks,
    /// Calendar months, clamped to month end.
    Months,
    /// Calendar years.
    Years,
}

impl TenorUnit {
    fn suffix(self) -> char {
        match self {
            TenorUnit::Days => 'd',
            TenorUnit::Weeks => 'w',
            TenorUnit::Months => 'm',
            TenorUnit::Years => 'y',
        }
    }
}

/// A relative maturity: `count` units after an anchor date.
///
/// # Example
///
/// ```rust
/// use toyval_core::types::{Date, Tenor};
///
/// let tenor: Tenor = "3m".parse().unwrap();
/// let anchor = Date::from_ymd(2025, 11, 30).unwrap();
/// assert_eq!(tenor.advance(anchor).unwrap(), Date::from_ymd(2026, 2, 28).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tenor {
    count: u32,
    unit: TenorUnit,
}

impl Tenor {
    /// Creates a tenor.
    #[must_use]
    pub const fn new(count: u32, unit: TenorUnit) -> Self {
        Self { count, unit }
    }

    /// Creates a tenor in days.
    #[must_use]
    pub const fn days(count: u32) -> Self {
        Self::new(count, TenorUnit::Days)
    }

    /// Number of units.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// The unit.
    #[must_use]
    pub const fn unit(&self) -> TenorUnit {
        self.unit
    }

    /// Returns the unadjusted date `self` after `anchor`.
    pub fn advance(&self, anchor: Date) -> CoreResult<Date> {
        let count = i64::from(self.count);
        match self.unit {
            TenorUnit::Days => anchor.checked_add_days(count),
            TenorUnit::Weeks => anchor.checked_add_days(count * 7),
            TenorUnit::Months => anchor.add_months(self.count_i32()?),
            TenorUnit::Years => anchor.add_years(self.count_i32()?),
        }
    }

    fn count_i32(&self) -> CoreResult<i32> {
        i32::try_from(self.count)
            .map_err(|_| CoreError::malformed_tenor(self.to_string(), "count out of range"))
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.unit.suffix())
    }
}

impl FromStr for Tenor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some(last) = trimmed.chars().last() else {
            return Err(CoreError::malformed_tenor(s, "empty tenor"));
        };

        let unit = match last.to_ascii_lowercase() {
            'd' => TenorUnit::Days,
            'w' => TenorUnit::Weeks,
            'm' => TenorUnit::Months,
            'y' => TenorUnit::Years,
            other => {
                return Err(CoreError::malformed_tenor(
                    s,
                    format!("unknown unit '{other}'"),
                ))
            }
        };

        let digits = &trimmed[..trimmed.len() - last.len_utf8()];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::malformed_tenor(s, "count must be a whole number"));
        }

        let count = digits
            .parse::<u32>()
            .map_err(|_| CoreError::malformed_tenor(s, "count out of range"))?;

        Ok(Self::new(count, unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_units() {
        assert_eq!("90d".parse::<Tenor>().unwrap(), Tenor::days(90));
        assert_eq!("2W".parse::<Tenor>().unwrap(), Tenor::new(2, TenorUnit::Weeks));
        assert_eq!("3m".parse::<Tenor>().unwrap(), Tenor::new(3, TenorUnit::Months));
        assert_eq!(" 10Y ".parse::<Tenor>().unwrap(), Tenor::new(10, TenorUnit::Years));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "d", "90", "90x", "-5d", "1.5m", "ninety days"] {
            let err = bad.parse::<Tenor>().unwrap_err();
            assert!(
                matches!(err, CoreError::MalformedTenor { .. }),
                "{bad:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_advance() {
        let anchor = Date::from_ymd(2025, 1, 31).unwrap();
        assert_eq!(Tenor::days(90).advance(anchor).unwrap(), anchor.add_days(90));
        assert_eq!(
            "1w".parse::<Tenor>().unwrap().advance(anchor).unwrap(),
            anchor.add_days(7)
        );
        assert_eq!(
            "1m".parse::<Tenor>().unwrap().advance(anchor).unwrap(),
            Date::from_ymd(2025, 2, 28).unwrap()
        );
        assert_eq!(
            "2y".parse::<Tenor>().unwrap().advance(anchor).unwrap(),
            Date::from_ymd(2027, 1, 31).unwrap()
        );
    }

    #[test]
    fn test_zero_tenor_is_anchor() {
        let anchor = Date::from_ymd(2025, 3, 3).unwrap();
        assert_eq!("0d".parse::<Tenor>().unwrap().advance(anchor).unwrap(), anchor);
    }

    proptest! {
        #[test]
        fn prop_display_parses_back(count in 0u32..100_000, unit in 0usize..4) {
            let unit = [TenorUnit::Days, TenorUnit::Weeks, TenorUnit::Months, TenorUnit::Years][unit];
            let tenor = Tenor::new(count, unit);
            prop_assert_eq!(tenor.to_string().parse::<Tenor>().unwrap(), tenor);
        }

        #[test]
        fn prop_day_tenor_is_calendar_days(days in 0u32..20_000) {
            let anchor = Date::from_ymd(2024, 2, 29).unwrap();
            let maturity = Tenor::days(days).advance(anchor).unwrap();
            prop_assert_eq!(anchor.days_between(&maturity), i64::from(days));
        }
    }
}
