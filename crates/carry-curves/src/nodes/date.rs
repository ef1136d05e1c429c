//! Date policy of a curve node.

use serde::{Deserialize, Serialize};
use std::fmt;

use carry_core::Date;

/// How a curve node's date is determined.
///
/// The policy is part of a node's immutable configuration. Changing it means
/// building a new node (see `RepoCurveNode::with_date`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CurveNodeDate {
    /// The end date of the node's instrument.
    #[default]
    End,
    /// A literal date, independent of the instrument.
    Fixed(Date),
    /// The last fixing date of the node's instrument.
    LastFixing,
}

impl CurveNodeDate {
    /// Returns true if the node is pinned to a literal date.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, CurveNodeDate::Fixed(_))
    }

    /// The literal date, if the policy is `Fixed`.
    #[must_use]
    pub fn fixed_date(&self) -> Option<Date> {
        match self {
            CurveNodeDate::Fixed(date) => Some(*date),
            CurveNodeDate::End | CurveNodeDate::LastFixing => None,
        }
    }
}

impl fmt::Display for CurveNodeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveNodeDate::End => write!(f, "End"),
            CurveNodeDate::Fixed(date) => write!(f, "Fixed({date})"),
            CurveNodeDate::LastFixing => write!(f, "LastFixing"),
        }
    }
}
