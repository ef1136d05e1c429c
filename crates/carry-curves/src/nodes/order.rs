//! Ordering rules between adjacent curve nodes.

use serde::{Deserialize, Serialize};
use std::fmt;

use carry_core::Date;

use crate::error::{CurveError, CurveResult};

/// What to do when a node lands too close to the node before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CurveNodeClashAction {
    /// Fail curve construction.
    #[default]
    Exception,
    /// Drop the node carrying this rule.
    DropThis,
    /// Drop the earlier node.
    DropOther,
}

/// Outcome of checking one node against its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClashResolution {
    /// The nodes are far enough apart.
    Keep,
    /// Discard the later node.
    DropThis,
    /// Discard the earlier node.
    DropOther,
}

/// Minimum spacing between a node and the node before it, and the action
/// taken when the spacing is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateOrderFields")]
pub struct CurveNodeDateOrder {
    min_gap_in_days: u32,
    action: CurveNodeClashAction,
}

#[derive(Deserialize)]
struct DateOrderFields {
    min_gap_in_days: u32,
    #[serde(default)]
    action: CurveNodeClashAction,
}

impl TryFrom<DateOrderFields> for CurveNodeDateOrder {
    type Error = CurveError;

    fn try_from(fields: DateOrderFields) -> Result<Self, Self::Error> {
        Self::of(fields.min_gap_in_days, fields.action)
    }
}

impl CurveNodeDateOrder {
    /// At least one day after the previous node, failing otherwise.
    pub const DEFAULT: CurveNodeDateOrder = CurveNodeDateOrder {
        min_gap_in_days: 1,
        action: CurveNodeClashAction::Exception,
    };

    /// Creates an order rule.
    ///
    /// # Errors
    ///
    /// `CurveError::InvalidNode` if `min_gap_in_days` is zero.
    pub fn of(min_gap_in_days: u32, action: CurveNodeClashAction) -> CurveResult<Self> {
        if min_gap_in_days == 0 {
            return Err(CurveError::invalid_node(
                "date order minimum gap must be at least one day",
            ));
        }
        Ok(Self {
            min_gap_in_days,
            action,
        })
    }

    /// Minimum number of days after the previous node.
    #[must_use]
    pub fn min_gap_in_days(&self) -> u32 {
        self.min_gap_in_days
    }

    /// Action on a clash.
    #[must_use]
    pub fn action(&self) -> CurveNodeClashAction {
        self.action
    }

    /// Returns true if `date` is too close to `previous`.
    #[must_use]
    pub fn clashes(&self, previous: Date, date: Date) -> bool {
        previous.days_between(&date) < i64::from(self.min_gap_in_days)
    }

    /// Decides what happens to a node at `date` following one at `previous_date`.
    ///
    /// # Errors
    ///
    /// `CurveError::DateClash` when the dates clash and the action is `Exception`.
    pub fn resolve_clash(
        &self,
        previous_label: &str,
        previous_date: Date,
        label: &str,
        date: Date,
    ) -> CurveResult<ClashResolution> {
        if !self.clashes(previous_date, date) {
            return Ok(ClashResolution::Keep);
        }
        match self.action {
            CurveNodeClashAction::Exception => Err(CurveError::DateClash {
                label: label.to_string(),
                date,
                previous_label: previous_label.to_string(),
                previous_date,
                min_gap_in_days: self.min_gap_in_days,
            }),
            CurveNodeClashAction::DropThis => Ok(ClashResolution::DropThis),
            CurveNodeClashAction::DropOther => Ok(ClashResolution::DropOther),
        }
    }
}

impl Default for CurveNodeDateOrder {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for CurveNodeDateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D {:?}", self.min_gap_in_days, self.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_default() {
        let order = CurveNodeDateOrder::default();
        assert_eq!(order.min_gap_in_days(), 1);
        assert_eq!(order.action(), CurveNodeClashAction::Exception);
    }

    #[test]
    fn test_zero_gap_rejected() {
        assert!(CurveNodeDateOrder::of(0, CurveNodeClashAction::DropThis).is_err());
    }

    #[test]
    fn test_clashes() {
        let order = CurveNodeDateOrder::of(7, CurveNodeClashAction::DropThis).unwrap();
        assert!(order.clashes(date(2025, 3, 17), date(2025, 3, 23)));
        assert!(!order.clashes(date(2025, 3, 17), date(2025, 3, 24)));
        assert!(order.clashes(date(2025, 3, 17), date(2025, 3, 10)));
    }

    #[test]
    fn test_resolve_clash_actions() {
        let prev = date(2025, 3, 17);
        let same = date(2025, 3, 17);
        let exception = CurveNodeDateOrder::DEFAULT;
        let err = exception.resolve_clash("1W", prev, "5D", same).unwrap_err();
        assert!(matches!(err, CurveError::DateClash { min_gap_in_days: 1, .. }));

        let drop_this = CurveNodeDateOrder::of(1, CurveNodeClashAction::DropThis).unwrap();
        assert_eq!(
            drop_this.resolve_clash("1W", prev, "5D", same).unwrap(),
            ClashResolution::DropThis
        );

        let drop_other = CurveNodeDateOrder::of(1, CurveNodeClashAction::DropOther).unwrap();
        assert_eq!(
            drop_other.resolve_clash("1W", prev, "5D", same).unwrap(),
            ClashResolution::DropOther
        );
        assert_eq!(
            drop_other
                .resolve_clash("1W", prev, "1M", date(2025, 4, 17))
                .unwrap(),
            ClashResolution::Keep
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: CurveNodeDateOrder =
            serde_json::from_str(r#"{"min_gap_in_days":3,"action":"DropOther"}"#).unwrap();
        assert_eq!(ok.min_gap_in_days(), 3);
        assert!(serde_json::from_str::<CurveNodeDateOrder>(r#"{"min_gap_in_days":0}"#).is_err());
    }
}
