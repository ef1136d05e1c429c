//! Holiday calendars and business day adjustment.
//!
//! Calendars are plain data: a weekend rule plus an explicit holiday set.
//! They are looked up by [`HolidayCalendarId`] from reference data at the
//! point a product is resolved, never captured by the product itself.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

mod conventions;

pub use conventions::{BusinessDayAdjustment, BusinessDayConvention};

use crate::types::Date;

/// Identifier of a holiday calendar, e.g. `SatSun` or `GBLO`.
#[derive(Debug, Clone, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayCalendarId(String);

impl HolidayCalendarId {
    /// Calendar with no holidays and no weekends.
    pub const NO_HOLIDAYS: &'static str = "NoHolidays";
    /// Calendar with Saturday/Sunday weekends and no other holidays.
    pub const SAT_SUN: &'static str = "SatSun";

    /// Create a new calendar ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The `NoHolidays` calendar ID.
    pub fn no_holidays() -> Self {
        Self::new(Self::NO_HOLIDAYS)
    }

    /// The `SatSun` calendar ID.
    pub fn sat_sun() -> Self {
        Self::new(Self::SAT_SUN)
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HolidayCalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for HolidayCalendarId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Weekend rule of a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeekendType {
    /// Saturday and Sunday (most markets)
    #[default]
    SaturdaySunday,
    /// Friday and Saturday
    FridaySaturday,
    /// No weekends
    None,
}

impl WeekendType {
    /// Check if a weekday is a weekend day for this type.
    #[inline]
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        match self {
            WeekendType::SaturdaySunday => matches!(weekday, Weekday::Sat | Weekday::Sun),
            WeekendType::FridaySaturday => matches!(weekday, Weekday::Fri | Weekday::Sat),
            WeekendType::None => false,
        }
    }
}

/// A holiday calendar: weekend rule plus explicit holidays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    id: HolidayCalendarId,
    weekend: WeekendType,
    holidays: BTreeSet<Date>,
}

impl HolidayCalendar {
    /// Creates a calendar from an ID, weekend rule and holiday dates.
    pub fn new(
        id: HolidayCalendarId,
        weekend: WeekendType,
        holidays: impl IntoIterator<Item = Date>,
    ) -> Self {
        Self {
            id,
            weekend,
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Every day is a business day.
    pub fn no_holidays() -> Self {
        Self::new(HolidayCalendarId::no_holidays(), WeekendType::None, [])
    }

    /// Saturday and Sunday are the only non-business days.
    pub fn sat_sun() -> Self {
        Self::new(HolidayCalendarId::sat_sun(), WeekendType::SaturdaySunday, [])
    }

    /// Returns the calendar ID.
    pub fn id(&self) -> &HolidayCalendarId {
        &self.id
    }

    /// Returns true if the date is a business day.
    pub fn is_business_day(&self, date: Date) -> bool {
        !self.weekend.is_weekend(date.weekday()) && !self.holidays.contains(&date)
    }

    /// Returns true if the date is a weekend day or holiday.
    pub fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Returns the next business day on or after the given date.
    pub fn next_or_same(&self, mut date: Date) -> Date {
        while !self.is_business_day(date) {
            date = date.add_days(1);
        }
        date
    }

    /// Returns the previous business day on or before the given date.
    pub fn previous_or_same(&self, mut date: Date) -> Date {
        while !self.is_business_day(date) {
            date = date.add_days(-1);
        }
        date
    }

    /// Moves a date by a number of business days.
    ///
    /// Zero days returns the date unchanged, even on a holiday.
    pub fn shift(&self, date: Date, days: i32) -> Date {
        let step: i64 = if days >= 0 { 1 } else { -1 };
        let mut result = date;
        let mut remaining = days.unsigned_abs();
        while remaining > 0 {
            result = result.add_days(step);
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }
        result
    }

    /// Adjusts a date according to the given business day convention.
    pub fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        conventions::adjust(date, convention, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_sat_sun() {
        let cal = HolidayCalendar::sat_sun();
        assert!(cal.is_business_day(date(2025, 3, 14)));
        assert!(cal.is_holiday(date(2025, 3, 15)));
        assert!(cal.is_holiday(date(2025, 3, 16)));
    }

    #[test]
    fn test_no_holidays() {
        let cal = HolidayCalendar::no_holidays();
        assert!(cal.is_business_day(date(2025, 3, 15)));
        assert_eq!(cal.shift(date(2025, 3, 14), 2), date(2025, 3, 16));
    }

    #[test]
    fn test_explicit_holidays() {
        let cal = HolidayCalendar::new(
            HolidayCalendarId::new("XLON"),
            WeekendType::SaturdaySunday,
            [date(2025, 12, 25), date(2025, 12, 26)],
        );
        assert!(cal.is_holiday(date(2025, 12, 25)));
        assert_eq!(cal.next_or_same(date(2025, 12, 25)), date(2025, 12, 29));
        assert_eq!(cal.previous_or_same(date(2025, 12, 26)), date(2025, 12, 24));
    }

    #[test]
    fn test_shift_skips_weekend() {
        let cal = HolidayCalendar::sat_sun();
        // Friday + 2 business days = Tuesday
        assert_eq!(cal.shift(date(2025, 3, 14), 2), date(2025, 3, 18));
        // Monday - 1 business day = Friday
        assert_eq!(cal.shift(date(2025, 3, 17), -1), date(2025, 3, 14));
        assert_eq!(cal.shift(date(2025, 3, 15), 0), date(2025, 3, 15));
    }
}
