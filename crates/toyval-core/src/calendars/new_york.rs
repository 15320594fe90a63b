//! New York banking calendar.

use chrono::Weekday;

use super::Calendar;
use crate::types::Date;

/// New York calendar: weekends plus US Federal holidays with the usual
/// Saturday-to-Friday and Sunday-to-Monday observance.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewYorkCalendar;

impl NewYorkCalendar {
    /// Returns true if the date is a US Federal holiday (or its observed day).
    fn is_federal_holiday(date: Date) -> bool {
        let year = date.year();
        let month = date.month();
        let day = date.day();
        let weekday = date.weekday();

        match (month, day) {
            // New Year's Day
            (1, 1) => return true,
            (12, 31) if weekday == Weekday::Fri => return true,
            (1, 2) if weekday == Weekday::Mon => return true,

            // Juneteenth, since 2021
            (6, 19) if year >= 2021 => return true,
            (6, 18) if year >= 2021 && weekday == Weekday::Fri => return true,
            (6, 20) if year >= 2021 && weekday == Weekday::Mon => return true,

            // Independence Day
            (7, 4) => return true,
            (7, 3) if weekday == Weekday::Fri => return true,
            (7, 5) if weekday == Weekday::Mon => return true,

            // Veterans Day
            (11, 11) => return true,
            (11, 10) if weekday == Weekday::Fri => return true,
            (11, 12) if weekday == Weekday::Mon => return true,

            // Christmas Day
            (12, 25) => return true,
            (12, 24) if weekday == Weekday::Fri => return true,
            (12, 26) if weekday == Weekday::Mon => return true,

            _ => {}
        }

        match month {
            // MLK Day, Presidents Day
            1 | 2 => is_nth_weekday(date, Weekday::Mon, 3),
            // Memorial Day
            5 => is_last_weekday(date, Weekday::Mon),
            // Labor Day
            9 => is_nth_weekday(date, Weekday::Mon, 1),
            // Columbus Day
            10 => is_nth_weekday(date, Weekday::Mon, 2),
            // Thanksgiving
            11 => is_nth_weekday(date, Weekday::Thu, 4),
            _ => false,
        }
    }
}

impl Calendar for NewYorkCalendar {
    fn name(&self) -> &'static str {
        "NewYork"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend() && !Self::is_federal_holiday(date)
    }
}

/// Returns true if date is the nth occurrence of weekday in its month.
fn is_nth_weekday(date: Date, weekday: Weekday, n: u32) -> bool {
    date.weekday() == weekday && (date.day() - 1) / 7 + 1 == n
}

/// Returns true if date is the last occurrence of weekday in its month.
fn is_last_weekday(date: Date, weekday: Weekday) -> bool {
    date.weekday() == weekday && date.add_days(7).month() != date.month()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekend() {
        let cal = NewYorkCalendar;

        assert!(!cal.is_business_day(Date::from_ymd(2025, 1, 4).unwrap()));
        assert!(!cal.is_business_day(Date::from_ymd(2025, 1, 5).unwrap()));
        assert!(cal.is_business_day(Date::from_ymd(2025, 1, 6).unwrap()));
    }

    #[test]
    fn test_fixed_holidays() {
        let cal = NewYorkCalendar;

        assert!(!cal.is_business_day(Date::from_ymd(2025, 1, 1).unwrap()));
        assert!(!cal.is_business_day(Date::from_ymd(2025, 7, 4).unwrap()));
        assert!(!cal.is_business_day(Date::from_ymd(2025, 12, 25).unwrap()));
        // Juneteenth 2027 falls on a Saturday, observed Friday June 18
        assert!(!cal.is_business_day(Date::from_ymd(2027, 6, 18).unwrap()));
    }

    #[test]
    fn test_floating_holidays() {
        let cal = NewYorkCalendar;

        // 2025: MLK Jan 20, Memorial May 26, Labor Sep 1, Thanksgiving Nov 27
        assert!(!cal.is_business_day(Date::from_ymd(2025, 1, 20).unwrap()));
        assert!(!cal.is_business_day(Date::from_ymd(2025, 5, 26).unwrap()));
        assert!(!cal.is_business_day(Date::from_ymd(2025, 9, 1).unwrap()));
        assert!(!cal.is_business_day(Date::from_ymd(2025, 11, 27).unwrap()));

        // Surrounding days are open
        assert!(cal.is_business_day(Date::from_ymd(2025, 1, 21).unwrap()));
        assert!(cal.is_business_day(Date::from_ymd(2025, 11, 28).unwrap()));
    }
}
