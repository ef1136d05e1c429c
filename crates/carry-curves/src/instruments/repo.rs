//! Term repo instrument.
//!
//! A term repo exchanges cash against collateral on the start date and
//! reverses on the end date, with simple interest at the repo rate accrued
//! over the period. Only the cash leg matters for curve calibration.

use serde::{Deserialize, Serialize};
use std::fmt;

use carry_core::calendars::{BusinessDayAdjustment, BusinessDayConvention, HolidayCalendarId};
use carry_core::daycounts::DayCountConvention;
use carry_core::{Date, Tenor};

use super::BuySell;
use crate::error::{CurveError, CurveResult};
use crate::market::ReferenceData;

/// Market conventions for a term repo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoConvention {
    /// Convention name, e.g. `GBP-REPO`.
    pub name: String,
    /// Business days from trade date to start date.
    pub spot_days: u32,
    /// Adjustment applied to the start and end dates.
    pub business_day_adjustment: BusinessDayAdjustment,
    /// Accrual day count.
    #[serde(default)]
    pub day_count: DayCountConvention,
}

impl RepoConvention {
    /// Creates a convention.
    pub fn new(
        name: impl Into<String>,
        spot_days: u32,
        business_day_adjustment: BusinessDayAdjustment,
        day_count: DayCountConvention,
    ) -> Self {
        Self {
            name: name.into(),
            spot_days,
            business_day_adjustment,
            day_count,
        }
    }

    /// GBP repo: same-day start, ACT/365F.
    pub fn gbp_repo() -> Self {
        Self::new(
            "GBP-REPO",
            0,
            BusinessDayAdjustment::new(
                BusinessDayConvention::ModifiedFollowing,
                HolidayCalendarId::sat_sun(),
            ),
            DayCountConvention::Act365Fixed,
        )
    }

    /// USD repo: same-day start, ACT/360.
    pub fn usd_repo() -> Self {
        Self::new(
            "USD-REPO",
            0,
            BusinessDayAdjustment::new(
                BusinessDayConvention::ModifiedFollowing,
                HolidayCalendarId::sat_sun(),
            ),
            DayCountConvention::Act360,
        )
    }

    /// EUR repo: T+2 start, ACT/360.
    pub fn eur_repo() -> Self {
        Self::new(
            "EUR-REPO",
            2,
            BusinessDayAdjustment::new(
                BusinessDayConvention::ModifiedFollowing,
                HolidayCalendarId::sat_sun(),
            ),
            DayCountConvention::Act360,
        )
    }
}

/// Template for a term repo of a given tenor.
///
/// The template knows how long the repo runs but not its rate, direction or
/// size; those are supplied when a trade is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoTemplate {
    tenor: Tenor,
    convention: RepoConvention,
}

impl RepoTemplate {
    /// Creates a template from a tenor and convention.
    pub fn of(tenor: Tenor, convention: RepoConvention) -> Self {
        Self { tenor, convention }
    }

    /// The tenor of the repo.
    pub fn tenor(&self) -> &Tenor {
        &self.tenor
    }

    /// The market convention.
    pub fn convention(&self) -> &RepoConvention {
        &self.convention
    }

    /// Creates a trade from the template.
    ///
    /// The start date is `spot_days` business days after the trade date,
    /// adjusted; the end date is the start date plus the tenor and is left
    /// unadjusted until the product is resolved.
    pub fn create_trade(
        &self,
        trade_date: Date,
        buy_sell: BuySell,
        notional: f64,
        rate: f64,
        ref_data: &dyn ReferenceData,
    ) -> CurveResult<RepoTrade> {
        let adjustment = &self.convention.business_day_adjustment;
        let calendar = ref_data.holiday_calendar(&adjustment.calendar)?;
        let spot_days = i32::try_from(self.convention.spot_days).map_err(|_| {
            CurveError::invalid_instrument(format!(
                "spot days {} out of range",
                self.convention.spot_days
            ))
        })?;

        let start_date = adjustment.adjust(calendar.shift(trade_date, spot_days), calendar);
        let end_date = start_date.plus_tenor(&self.tenor)?;

        let product = Repo::new(
            buy_sell,
            notional,
            rate,
            start_date,
            end_date,
            adjustment.clone(),
            self.convention.day_count,
        )?;
        Ok(RepoTrade {
            trade_date,
            product,
        })
    }
}

impl fmt::Display for RepoTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tenor, self.convention.name)
    }
}

/// A term repo before business day adjustment of its end date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repo {
    buy_sell: BuySell,
    notional: f64,
    rate: f64,
    start_date: Date,
    end_date: Date,
    business_day_adjustment: BusinessDayAdjustment,
    day_count: DayCountConvention,
}

impl Repo {
    /// Creates a repo.
    ///
    /// # Errors
    ///
    /// `CurveError::InvalidInstrument` if the notional is negative or the
    /// end date is not after the start date.
    pub fn new(
        buy_sell: BuySell,
        notional: f64,
        rate: f64,
        start_date: Date,
        end_date: Date,
        business_day_adjustment: BusinessDayAdjustment,
        day_count: DayCountConvention,
    ) -> CurveResult<Self> {
        if notional < 0.0 {
            return Err(CurveError::invalid_instrument(format!(
                "repo notional must not be negative: {notional}"
            )));
        }
        if end_date <= start_date {
            return Err(CurveError::invalid_instrument(format!(
                "repo end date {end_date} must be after start date {start_date}"
            )));
        }
        Ok(Self {
            buy_sell,
            notional,
            rate,
            start_date,
            end_date,
            business_day_adjustment,
            day_count,
        })
    }

    /// Direction of the repo.
    pub fn buy_sell(&self) -> BuySell {
        self.buy_sell
    }

    /// Unsigned notional.
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Repo rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Start date.
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Unadjusted end date.
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Resolves the repo, adjusting its dates with the holiday calendar.
    pub fn resolve(&self, ref_data: &dyn ReferenceData) -> CurveResult<ResolvedRepo> {
        let calendar = ref_data.holiday_calendar(&self.business_day_adjustment.calendar)?;
        let start_date = self.business_day_adjustment.adjust(self.start_date, calendar);
        let end_date = self.business_day_adjustment.adjust(self.end_date, calendar);
        if end_date <= start_date {
            return Err(CurveError::invalid_instrument(format!(
                "adjusted repo end date {end_date} must be after start date {start_date}"
            )));
        }

        Ok(ResolvedRepo {
            notional: self.buy_sell.normalize(self.notional),
            rate: self.rate,
            start_date,
            end_date,
            year_fraction: self.day_count.year_fraction(start_date, end_date),
        })
    }
}

/// A trade in a term repo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoTrade {
    trade_date: Date,
    product: Repo,
}

impl RepoTrade {
    /// The trade date.
    pub fn trade_date(&self) -> Date {
        self.trade_date
    }

    /// The traded product.
    pub fn product(&self) -> &Repo {
        &self.product
    }

    /// Resolves the trade against reference data.
    pub fn resolve(&self, ref_data: &dyn ReferenceData) -> CurveResult<ResolvedRepoTrade> {
        Ok(ResolvedRepoTrade {
            trade_date: self.trade_date,
            product: self.product.resolve(ref_data)?,
        })
    }
}

/// A repo with adjusted dates and accrual computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRepo {
    notional: f64,
    rate: f64,
    start_date: Date,
    end_date: Date,
    year_fraction: f64,
}

impl ResolvedRepo {
    /// Signed notional: positive when cash is lent.
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Repo rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Adjusted start date.
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Adjusted end date.
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Accrual year fraction between the adjusted dates.
    pub fn year_fraction(&self) -> f64 {
        self.year_fraction
    }

    /// Simple interest over the period, signed like the notional.
    pub fn interest(&self) -> f64 {
        self.notional * self.rate * self.year_fraction
    }

    /// Cash returned on the end date: notional plus interest.
    pub fn repayment(&self) -> f64 {
        self.notional + self.interest()
    }
}

/// A resolved repo trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRepoTrade {
    trade_date: Date,
    product: ResolvedRepo,
}

impl ResolvedRepoTrade {
    /// The trade date.
    pub fn trade_date(&self) -> Date {
        self.trade_date
    }

    /// The resolved product.
    pub fn product(&self) -> &ResolvedRepo {
        &self.product
    }
}
