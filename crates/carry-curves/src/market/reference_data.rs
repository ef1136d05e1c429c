//! Reference data lookup.

use std::collections::HashMap;

use carry_core::calendars::{HolidayCalendar, HolidayCalendarId};

use crate::error::{CurveError, CurveResult};

/// Static data needed to turn trades into their resolved form.
pub trait ReferenceData: Send + Sync {
    /// Finds a holiday calendar by ID.
    fn find_calendar(&self, id: &HolidayCalendarId) -> Option<&HolidayCalendar>;

    /// Returns a holiday calendar.
    ///
    /// # Errors
    ///
    /// `CurveError::MissingReferenceData` if the calendar is unknown.
    fn holiday_calendar(&self, id: &HolidayCalendarId) -> CurveResult<&HolidayCalendar> {
        self.find_calendar(id)
            .ok_or_else(|| CurveError::missing_reference_data(id.to_string()))
    }
}

/// Map-backed reference data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImmutableReferenceData {
    calendars: HashMap<HolidayCalendarId, HolidayCalendar>,
}

impl ImmutableReferenceData {
    /// Reference data with nothing in it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reference data holding the `NoHolidays` and `SatSun` calendars.
    pub fn standard() -> Self {
        Self::empty()
            .with_calendar(HolidayCalendar::no_holidays())
            .with_calendar(HolidayCalendar::sat_sun())
    }

    /// Adds (or replaces) a calendar under its own ID.
    #[must_use]
    pub fn with_calendar(mut self, calendar: HolidayCalendar) -> Self {
        self.calendars.insert(calendar.id().clone(), calendar);
        self
    }
}

impl ReferenceData for ImmutableReferenceData {
    fn find_calendar(&self, id: &HolidayCalendarId) -> Option<&HolidayCalendar> {
        self.calendars.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carry_core::calendars::WeekendType;
    use carry_core::Date;

    #[test]
    fn test_standard_calendars() {
        let rd = ImmutableReferenceData::standard();
        assert!(rd.holiday_calendar(&HolidayCalendarId::sat_sun()).is_ok());
        assert!(rd.holiday_calendar(&HolidayCalendarId::no_holidays()).is_ok());
    }

    #[test]
    fn test_missing_calendar() {
        let rd = ImmutableReferenceData::empty();
        let err = rd
            .holiday_calendar(&HolidayCalendarId::new("GBLO"))
            .unwrap_err();
        assert_eq!(err, CurveError::missing_reference_data("GBLO"));
    }

    #[test]
    fn test_custom_calendar() {
        let christmas = Date::from_ymd(2025, 12, 25).unwrap();
        let rd = ImmutableReferenceData::standard().with_calendar(HolidayCalendar::new(
            HolidayCalendarId::new("GBLO"),
            WeekendType::SaturdaySunday,
            [christmas],
        ));
        let cal = rd.holiday_calendar(&HolidayCalendarId::new("GBLO")).unwrap();
        assert!(cal.is_holiday(christmas));
    }
}
