//! # Carry Core
//!
//! Foundational types for the Carry repo curve library.
//!
//! - **Types**: [`Date`] and [`Tenor`]
//! - **Calendars**: holiday calendars and business day adjustment
//! - **Day Counts**: accrual year fractions
//!
//! ## Example
//!
//! ```rust
//! use carry_core::prelude::*;
//!
//! let trade_date = Date::from_ymd(2025, 3, 14).unwrap();
//! let tenor: Tenor = "3M".parse().unwrap();
//! let end = trade_date.plus_tenor(&tenor).unwrap();
//! assert_eq!(end, Date::from_ymd(2025, 6, 14).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        BusinessDayAdjustment, BusinessDayConvention, HolidayCalendar, HolidayCalendarId,
    };
    pub use crate::daycounts::DayCountConvention;
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Date, Tenor};
}

pub use error::{CoreError, CoreResult};
pub use types::{Date, Tenor};
