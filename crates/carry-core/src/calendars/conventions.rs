//! Business day conventions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{HolidayCalendar, HolidayCalendarId};
use crate::types::Date;

/// How a date falling on a non-business day is rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BusinessDayConvention {
    /// No adjustment - use the date as-is even if not a business day.
    Unadjusted,

    /// Move to the following business day.
    Following,

    /// Move to the following business day, unless it crosses a month boundary,
    /// in which case move to the preceding business day.
    #[default]
    ModifiedFollowing,

    /// Move to the preceding business day.
    Preceding,

    /// Move to the preceding business day, unless it crosses a month boundary,
    /// in which case move to the following business day.
    ModifiedPreceding,
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "ModifiedFollowing",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "ModifiedPreceding",
        };
        write!(f, "{name}")
    }
}

pub(super) fn adjust(
    date: Date,
    convention: BusinessDayConvention,
    calendar: &HolidayCalendar,
) -> Date {
    if calendar.is_business_day(date) {
        return date;
    }

    match convention {
        BusinessDayConvention::Unadjusted => date,
        BusinessDayConvention::Following => calendar.next_or_same(date),
        BusinessDayConvention::ModifiedFollowing => {
            let adjusted = calendar.next_or_same(date);
            if adjusted.month() == date.month() {
                adjusted
            } else {
                calendar.previous_or_same(date)
            }
        }
        BusinessDayConvention::Preceding => calendar.previous_or_same(date),
        BusinessDayConvention::ModifiedPreceding => {
            let adjusted = calendar.previous_or_same(date);
            if adjusted.month() == date.month() {
                adjusted
            } else {
                calendar.next_or_same(date)
            }
        }
    }
}

/// A business day convention paired with the calendar it applies to.
///
/// The calendar is held by ID; callers resolve it before adjusting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusinessDayAdjustment {
    /// Rolling rule.
    pub convention: BusinessDayConvention,
    /// Calendar the rule is evaluated against.
    pub calendar: HolidayCalendarId,
}

impl BusinessDayAdjustment {
    /// Creates a new adjustment.
    pub fn new(convention: BusinessDayConvention, calendar: HolidayCalendarId) -> Self {
        Self {
            convention,
            calendar,
        }
    }

    /// No adjustment at all.
    pub fn none() -> Self {
        Self::new(
            BusinessDayConvention::Unadjusted,
            HolidayCalendarId::no_holidays(),
        )
    }

    /// Adjusts a date using an already-resolved calendar.
    pub fn adjust(&self, date: Date, calendar: &HolidayCalendar) -> Date {
        calendar.adjust(date, self.convention)
    }
}

impl fmt::Display for BusinessDayAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} using calendar {}", self.convention, self.calendar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_following_and_preceding() {
        let cal = HolidayCalendar::sat_sun();
        let saturday = date(2025, 3, 15);
        assert_eq!(cal.adjust(saturday, BusinessDayConvention::Following), date(2025, 3, 17));
        assert_eq!(cal.adjust(saturday, BusinessDayConvention::Preceding), date(2025, 3, 14));
        assert_eq!(cal.adjust(saturday, BusinessDayConvention::Unadjusted), saturday);
    }

    #[test]
    fn test_modified_following_month_end() {
        let cal = HolidayCalendar::sat_sun();
        // Saturday 31 May 2025 rolls back to Friday 30 May
        let eom = date(2025, 5, 31);
        assert_eq!(
            cal.adjust(eom, BusinessDayConvention::ModifiedFollowing),
            date(2025, 5, 30)
        );
    }

    #[test]
    fn test_modified_preceding_month_start() {
        let cal = HolidayCalendar::sat_sun();
        // Saturday 1 March 2025 rolls forward to Monday 3 March
        let som = date(2025, 3, 1);
        assert_eq!(
            cal.adjust(som, BusinessDayConvention::ModifiedPreceding),
            date(2025, 3, 3)
        );
    }

    #[test]
    fn test_business_day_untouched() {
        let cal = HolidayCalendar::sat_sun();
        let monday = date(2025, 3, 17);
        for convention in [
            BusinessDayConvention::Following,
            BusinessDayConvention::ModifiedFollowing,
            BusinessDayConvention::Preceding,
        ] {
            assert_eq!(cal.adjust(monday, convention), monday);
        }
    }

    #[test]
    fn test_adjustment_display() {
        let adj = BusinessDayAdjustment::new(
            BusinessDayConvention::Following,
            HolidayCalendarId::sat_sun(),
        );
        assert_eq!(adj.to_string(), "Following using calendar SatSun");
    }
}
