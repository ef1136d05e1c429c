//! Value types a calibrated curve can be expressed in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Describes what a curve's parameters represent.
///
/// Calibration asks each node for a starting point in the representation
/// it is solving for, so the node needs to know which one is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// Discount factor: P(t) where P(0) = 1.
    DiscountFactor,
    /// Continuously compounded zero rate.
    ZeroRate,
    /// Forward rate.
    ForwardRate,
    /// Survival probability: Q(t) = P(default time > t).
    SurvivalProbability,
    /// Instantaneous hazard rate.
    HazardRate,
    /// Year fraction, as used on curve x-axes.
    YearFraction,
    /// Price index value (inflation curves).
    PriceIndex,
}

impl ValueType {
    /// Returns true if this is an interest rate representation.
    #[must_use]
    pub fn is_rate_type(&self) -> bool {
        matches!(self, ValueType::ZeroRate | ValueType::ForwardRate)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::DiscountFactor => "Discount Factor",
            ValueType::ZeroRate => "Zero Rate",
            ValueType::ForwardRate => "Forward Rate",
            ValueType::SurvivalProbability => "Survival Probability",
            ValueType::HazardRate => "Hazard Rate",
            ValueType::YearFraction => "Year Fraction",
            ValueType::PriceIndex => "Price Index",
        };
        write!(f, "{name}")
    }
}
