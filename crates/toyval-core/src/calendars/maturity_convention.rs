//! Named maturity conventions such as `"NewYorkModFoll"` or `"NoHolidays"`.
//!
//! A name is a calendar prefix followed by an adjustment code:
//!
//! | name | calendar | adjustment |
//! |---|---|---|
//! | `NoHolidays` | every day open | none |
//! | `NewYorkModFoll` | New York | modified following |
//! | `WeekendsFoll` | weekends only | following |
//!
//! Adjustment codes are `Unadj`, `Foll`, `ModFoll`, `Prec` and `ModPrec`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{BusinessDayConvention, CalendarId};
use crate::error::{CoreError, CoreResult};
use crate::types::{Date, MaturitySpec};

/// Convention used when a caller does not name one.
pub const DEFAULT_MATURITY_CONVENTION: &str = "NewYorkModFoll";

/// A calendar paired with an adjustment rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaturityConvention {
    /// Which days are business days.
    pub calendar: CalendarId,
    /// How non-business days are rolled.
    pub adjustment: BusinessDayConvention,
}

impl MaturityConvention {
    /// Creates a convention.
    #[must_use]
    pub const fn new(calendar: CalendarId, adjustment: BusinessDayConvention) -> Self {
        Self {
            calendar,
            adjustment,
        }
    }

    /// The no-adjustment convention.
    #[must_use]
    pub const fn no_holidays() -> Self {
        Self::new(CalendarId::NoHolidays, BusinessDayConvention::Unadjusted)
    }

    /// Adjusts a date under this convention.
    pub fn adjust(&self, date: Date) -> CoreResult<Date> {
        self.calendar.calendar().adjust(date, self.adjustment)
    }

    /// Resolves a maturity against `anchor`, then adjusts it.
    pub fn resolve(&self, anchor: Date, maturity: &MaturitySpec) -> CoreResult<Date> {
        self.adjust(maturity.unadjusted(anchor)?)
    }
}

impl fmt::Display for MaturityConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.calendar == CalendarId::NoHolidays {
            return write!(f, "{}", self.calendar.name());
        }
        write!(f, "{}{}", self.calendar.name(), self.adjustment.code())
    }
}

impl FromStr for MaturityConvention {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name == CalendarId::NoHolidays.name() {
            return Ok(Self::no_holidays());
        }

        CalendarId::ALL
            .iter()
            .filter(|id| **id != CalendarId::NoHolidays)
            .find_map(|id| {
                let code = name.strip_prefix(id.name())?;
                BusinessDayConvention::from_code(code).map(|adj| Self::new(*id, adj))
            })
            .ok_or_else(|| CoreError::unknown_convention(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!(
            "NewYorkModFoll".parse::<MaturityConvention>().unwrap(),
            MaturityConvention::new(CalendarId::NewYork, BusinessDayConvention::ModifiedFollowing)
        );
        assert_eq!(
            "WeekendsPrec".parse::<MaturityConvention>().unwrap(),
            MaturityConvention::new(CalendarId::Weekends, BusinessDayConvention::Preceding)
        );
        assert_eq!(
            "NoHolidays".parse::<MaturityConvention>().unwrap(),
            MaturityConvention::no_holidays()
        );
    }

    #[test]
    fn test_unknown_names() {
        for bad in ["", "NewYork", "LondonModFoll", "NewYorkNearest", "newyorkmodfoll", "NoHolidaysFoll"] {
            let err = bad.parse::<MaturityConvention>().unwrap_err();
            assert!(matches!(err, CoreError::UnknownConvention { .. }), "{bad}");
        }
    }

    #[test]
    fn test_display_round_trip() {
        for name in ["NoHolidays", "NewYorkModFoll", "WeekendsUnadj", "NewYorkModPrec"] {
            assert_eq!(name.parse::<MaturityConvention>().unwrap().to_string(), name);
        }
    }

    #[test]
    fn test_default_convention_parses() {
        assert!(DEFAULT_MATURITY_CONVENTION.parse::<MaturityConvention>().is_ok());
    }

    #[test]
    fn test_resolve_tenor_new_york() {
        // 2025-09-28 + 90d = 2025-12-27 (Saturday); modified following -> Monday 2025-12-29
        let anchor = Date::from_ymd(2025, 9, 28).unwrap();
        let convention: MaturityConvention = "NewYorkModFoll".parse().unwrap();
        let maturity = convention.resolve(anchor, &MaturitySpec::tenor("90d")).unwrap();
        assert_eq!(maturity, Date::from_ymd(2025, 12, 29).unwrap());
    }

    #[test]
    fn test_resolve_no_holidays_matches_explicit_date() {
        let anchor = Date::from_ymd(2025, 10, 18).unwrap();
        let convention = MaturityConvention::no_holidays();

        let by_tenor = convention.resolve(anchor, &MaturitySpec::tenor("90d")).unwrap();
        let by_date = convention
            .resolve(anchor, &MaturitySpec::Date(anchor.add_days(90)))
            .unwrap();
        assert_eq!(by_tenor, by_date);
    }
}
