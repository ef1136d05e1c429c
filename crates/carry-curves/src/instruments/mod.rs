//! Calibration instruments.
//!
//! A curve node never builds cashflows itself. It asks a template for a
//! trade and resolves that trade against reference data, so everything
//! schedule-related lives here.
//!
//! - [`RepoTemplate`]: a tenor plus a [`RepoConvention`], the node's template
//! - [`RepoTrade`] / [`Repo`]: the unresolved trade and product
//! - [`ResolvedRepoTrade`] / [`ResolvedRepo`]: the same with adjusted dates

mod repo;

pub use repo::{Repo, RepoConvention, RepoTemplate, RepoTrade, ResolvedRepo, ResolvedRepoTrade};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a trade.
///
/// For a repo, `Buy` lends cash against collateral and receives the repo
/// rate; `Sell` borrows cash and pays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuySell {
    /// Lend cash, receive interest.
    Buy,
    /// Borrow cash, pay interest.
    Sell,
}

impl BuySell {
    /// +1 for `Buy`, -1 for `Sell`.
    #[must_use]
    pub fn sign(&self) -> f64 {
        match self {
            BuySell::Buy => 1.0,
            BuySell::Sell => -1.0,
        }
    }

    /// Applies the direction to an amount, ignoring the amount's own sign.
    #[must_use]
    pub fn normalize(&self, amount: f64) -> f64 {
        amount.abs() * self.sign()
    }

    /// Returns true for `Buy`.
    #[must_use]
    pub fn is_buy(&self) -> bool {
        matches!(self, BuySell::Buy)
    }
}

impl fmt::Display for BuySell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuySell::Buy => write!(f, "Buy"),
            BuySell::Sell => write!(f, "Sell"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(BuySell::Buy.normalize(-5.0), 5.0);
        assert_eq!(BuySell::Sell.normalize(5.0), -5.0);
        assert_eq!(BuySell::Sell.normalize(-5.0), -5.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(BuySell::Buy.to_string(), "Buy");
        assert!(!BuySell::Sell.is_buy());
    }
}
