//! Business day adjustment conventions.

use serde::{Deserialize, Serialize};

use super::Calendar;
use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// Longest run of non-business days a calendar may produce before rolling gives up.
const MAX_ROLL_DAYS: i64 = 366;

/// Business day adjustment conventions.
///
/// These conventions specify how to adjust a date that falls
/// on a non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BusinessDayConvention {
    /// No adjustment - use the date as-is even if not a business day.
    Unadjusted,

    /// Move to the following business day.
    #[default]
    Following,

    /// Move to the following business day, unless it crosses a month boundary,
    /// in which case move to the preceding business day.
    ModifiedFollowing,

    /// Move to the preceding business day.
    Preceding,

    /// Move to the preceding business day, unless it crosses a month boundary,
    /// in which case move to the following business day.
    ModifiedPreceding,
}

impl BusinessDayConvention {
    /// Short code used in maturity convention names (`"ModFoll"`, ...).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            BusinessDayConvention::Unadjusted => "Unadj",
            BusinessDayConvention::Following => "Foll",
            BusinessDayConvention::ModifiedFollowing => "ModFoll",
            BusinessDayConvention::Preceding => "Prec",
            BusinessDayConvention::ModifiedPreceding => "ModPrec",
        }
    }

    /// Parses a short code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Unadj" => Some(BusinessDayConvention::Unadjusted),
            "Foll" => Some(BusinessDayConvention::Following),
            "ModFoll" => Some(BusinessDayConvention::ModifiedFollowing),
            "Prec" => Some(BusinessDayConvention::Preceding),
            "ModPrec" => Some(BusinessDayConvention::ModifiedPreceding),
            _ => None,
        }
    }
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
        };
        write!(f, "{name}")
    }
}

/// Adjusts a date according to the given business day convention.
pub fn adjust<C: Calendar + ?Sized>(
    date: Date,
    convention: BusinessDayConvention,
    calendar: &C,
) -> CoreResult<Date> {
    if convention == BusinessDayConvention::Unadjusted || calendar.is_business_day(date) {
        return Ok(date);
    }

    match convention {
        BusinessDayConvention::Unadjusted => Ok(date),

        BusinessDayConvention::Following => roll(date, 1, calendar),

        BusinessDayConvention::ModifiedFollowing => {
            let adjusted = roll(date, 1, calendar)?;
            if adjusted.month() != date.month() {
                roll(date, -1, calendar)
            } else {
                Ok(adjusted)
            }
        }

        BusinessDayConvention::Preceding => roll(date, -1, calendar),

        BusinessDayConvention::ModifiedPreceding => {
            let adjusted = roll(date, -1, calendar)?;
            if adjusted.month() != date.month() {
                roll(date, 1, calendar)
            } else {
                Ok(adjusted)
            }
        }
    }
}

/// Steps one day at a time in `direction` until a business day is reached.
fn roll<C: Calendar + ?Sized>(mut date: Date, direction: i64, calendar: &C) -> CoreResult<Date> {
    for _ in 0..MAX_ROLL_DAYS {
        if calendar.is_business_day(date) {
            return Ok(date);
        }
        date = date.checked_add_days(direction)?;
    }
    Err(CoreError::invalid_date(format!(
        "no business day within {MAX_ROLL_DAYS} days of {date} in {}",
        calendar.name()
    )))
}
