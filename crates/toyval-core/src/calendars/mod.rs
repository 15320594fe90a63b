//! Business day calendars and conventions.
//!
//! This module provides:
//! - Business day calendars ([`NoHolidaysCalendar`], [`WeekendCalendar`], [`NewYorkCalendar`])
//! - Business day adjustment conventions
//! - Named maturity conventions combining both

mod conventions;
mod maturity_convention;
mod new_york;

pub use conventions::{adjust, BusinessDayConvention};
pub use maturity_convention::{MaturityConvention, DEFAULT_MATURITY_CONVENTION};
pub use new_york::NewYorkCalendar;

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::types::Date;

/// Trait for business day calendars.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a holiday.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> CoreResult<Date> {
        conventions::adjust(date, convention, self)
    }
}

/// Calendar in which every day is a business day.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidaysCalendar;

impl Calendar for NoHolidaysCalendar {
    fn name(&self) -> &'static str {
        "NoHolidays"
    }

    fn is_business_day(&self, _date: Date) -> bool {
        true
    }
}

/// A weekend-only calendar (Saturday and Sunday closed, no holidays).
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Weekends"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}

/// Identifies one of the built-in calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarId {
    /// Every day is a business day.
    NoHolidays,
    /// Weekends only.
    Weekends,
    /// New York banking holidays.
    NewYork,
}

impl CalendarId {
    /// All built-in calendars, in name-matching order.
    pub const ALL: [CalendarId; 3] = [CalendarId::NoHolidays, CalendarId::Weekends, CalendarId::NewYork];

    /// Returns the calendar implementation.
    #[must_use]
    pub fn calendar(&self) -> &'static dyn Calendar {
        match self {
            CalendarId::NoHolidays => &NoHolidaysCalendar,
            CalendarId::Weekends => &WeekendCalendar,
            CalendarId::NewYork => &NewYorkCalendar,
        }
    }

    /// Name used as a maturity convention prefix.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.calendar().name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekend_calendar() {
        let cal = WeekendCalendar;

        assert!(cal.is_business_day(Date::from_ymd(2025, 1, 6).unwrap()));
        assert!(!cal.is_business_day(Date::from_ymd(2025, 1, 4).unwrap()));
        assert!(cal.is_holiday(Date::from_ymd(2025, 1, 5).unwrap()));
    }

    #[test]
    fn test_no_holidays_calendar() {
        let cal = NoHolidaysCalendar;
        let saturday = Date::from_ymd(2025, 1, 4).unwrap();
        let christmas = Date::from_ymd(2025, 12, 25).unwrap();

        assert!(cal.is_business_day(saturday));
        assert!(cal.is_business_day(christmas));
        assert_eq!(cal.adjust(saturday, BusinessDayConvention::Following).unwrap(), saturday);
    }

    #[test]
    fn test_calendar_ids() {
        assert_eq!(CalendarId::NewYork.name(), "NewYork");
        assert_eq!(CalendarId::NoHolidays.name(), "NoHolidays");
        assert_eq!(CalendarId::Weekends.name(), "Weekends");
    }
}
