//! Date type for financial calculations.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::Tenor;
use crate::error::{CoreError, CoreResult};

/// A calendar date for financial calculations.
///
/// Newtype over `chrono::NaiveDate`; serializes as an ISO 8601 string.
///
/// # Example
///
/// ```rust
/// use carry_core::types::Date;
///
/// let date = Date::from_ymd(2025, 1, 31).unwrap();
/// let next = date.add_months(1).unwrap();
/// assert_eq!(next, Date::from_ymd(2025, 2, 28).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses an ISO 8601 date (YYYY-MM-DD).
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns true for Saturday and Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Adds a (possibly negative) number of calendar days.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a (possibly negative) number of calendar days.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn checked_add_days(&self, days: i64) -> CoreResult<Self> {
        let shift = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.0.checked_add_days(shift)
        } else {
            self.0.checked_sub_days(shift)
        };
        shifted
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{self} plus {days} days")))
    }

    /// Adds a number of months, clamping to the last day of the target month.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let shift = Months::new(months.unsigned_abs());
        let shifted = if months >= 0 {
            self.0.checked_add_months(shift)
        } else {
            self.0.checked_sub_months(shift)
        };
        shifted
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{self} plus {months} months")))
    }

    /// Adds a number of years, clamping 29 February where needed.
    pub fn add_years(&self, years: i32) -> CoreResult<Self> {
        self.add_months(years.saturating_mul(12))
    }

    /// Adds a tenor to this date.
    ///
    /// Day and week tenors move by calendar days; month and year tenors
    /// keep the day of month, clamped to the month end.
    pub fn plus_tenor(&self, tenor: &Tenor) -> CoreResult<Self> {
        match *tenor {
            Tenor::Days(d) => self.checked_add_days(i64::from(d)),
            Tenor::Weeks(w) => self.checked_add_days(i64::from(w) * 7),
            Tenor::Months(m) => self.add_months(tenor_count(m)?),
            Tenor::Years(y) => self.add_years(tenor_count(y)?),
        }
    }

    /// Number of calendar days from `self` to `other` (negative if `other` is earlier).
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

fn tenor_count(n: u32) -> CoreResult<i32> {
    i32::try_from(n).map_err(|_| CoreError::invalid_date(format!("tenor count {n} overflows")))
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_parse_and_display() {
        let date: Date = "2025-03-17".parse().unwrap();
        assert_eq!(date, Date::from_ymd(2025, 3, 17).unwrap());
        assert_eq!(date.to_string(), "2025-03-17");
        assert!(Date::parse("17/03/2025").is_err());
    }

    #[test]
    fn test_add_months_clamps() {
        let date = Date::from_ymd(2025, 1, 31).unwrap();
        assert_eq!(date.add_months(1).unwrap(), Date::from_ymd(2025, 2, 28).unwrap());
        assert_eq!(date.add_months(-2).unwrap(), Date::from_ymd(2024, 11, 30).unwrap());
    }

    #[test]
    fn test_add_years_leap_day() {
        let leap = Date::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(leap.add_years(1).unwrap(), Date::from_ymd(2025, 2, 28).unwrap());
    }

    #[test]
    fn test_plus_tenor() {
        let start = Date::from_ymd(2025, 1, 15).unwrap();
        assert_eq!(start.plus_tenor(&Tenor::Days(1)).unwrap(), start.add_days(1));
        assert_eq!(start.plus_tenor(&Tenor::Weeks(2)).unwrap(), start.add_days(14));
        assert_eq!(
            start.plus_tenor(&Tenor::Months(3)).unwrap(),
            Date::from_ymd(2025, 4, 15).unwrap()
        );
        assert_eq!(
            start.plus_tenor(&Tenor::Years(1)).unwrap(),
            Date::from_ymd(2026, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_plus_tenor_out_of_range() {
        let start = Date::from_ymd(2025, 3, 14).unwrap();
        assert!(start.plus_tenor(&Tenor::Days(200_000_000)).is_err());
        assert!(start.plus_tenor(&Tenor::Weeks(u32::MAX)).is_err());
        assert!(start.plus_tenor(&Tenor::Months(2_000_000_000)).is_err());
        assert!(matches!(
            start.checked_add_days(i64::MIN),
            Err(CoreError::InvalidDate { .. })
        ));
        assert_eq!(
            start.checked_add_days(-14).unwrap(),
            Date::from_ymd(2025, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_days_between_and_sub() {
        let d1 = Date::from_ymd(2025, 1, 1).unwrap();
        let d2 = Date::from_ymd(2025, 1, 31).unwrap();
        assert_eq!(d1.days_between(&d2), 30);
        assert_eq!(d2 - d1, 30);
        assert_eq!(d2.days_between(&d1), -30);
    }

    #[test]
    fn test_weekend() {
        assert!(Date::from_ymd(2025, 3, 15).unwrap().is_weekend());
        assert!(!Date::from_ymd(2025, 3, 17).unwrap().is_weekend());
    }

    #[test]
    fn test_serde_transparent() {
        let date = Date::from_ymd(2025, 3, 17).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-03-17\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
    }
}
