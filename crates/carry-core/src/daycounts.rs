//! Day count conventions for money market accrual.
//!
//! Repos accrue simple interest over a single period, so only the
//! conventions seen on money market instruments are provided.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Date;

/// Day count convention used to turn a date range into a year fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// Actual/360 - USD, EUR money markets.
    #[default]
    Act360,
    /// Actual/365 Fixed - GBP money markets.
    Act365Fixed,
    /// 30E/360 - Eurobond basis.
    Thirty360E,
}

impl DayCountConvention {
    /// Market name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Act365Fixed => "ACT/365F",
            DayCountConvention::Thirty360E => "30E/360",
        }
    }

    /// Days counted between `start` and `end` under this convention.
    #[must_use]
    pub fn day_count(&self, start: Date, end: Date) -> i64 {
        match self {
            DayCountConvention::Act360 | DayCountConvention::Act365Fixed => {
                start.days_between(&end)
            }
            DayCountConvention::Thirty360E => {
                let d1 = i64::from(start.day().min(30));
                let d2 = i64::from(end.day().min(30));
                let months = i64::from(end.year() - start.year()) * 12
                    + i64::from(end.month())
                    - i64::from(start.month());
                months * 30 + (d2 - d1)
            }
        }
    }

    /// Year fraction between `start` and `end`.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        let basis = match self {
            DayCountConvention::Act360 | DayCountConvention::Thirty360E => 360.0,
            DayCountConvention::Act365Fixed => 365.0,
        };
        self.day_count(start, end) as f64 / basis
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
