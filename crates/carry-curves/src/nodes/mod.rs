//! Curve nodes.
//!
//! A curve node is one calibration point: a market quote bound to an
//! instrument template. The calibration engine drives nodes through the
//! [`CurveNode`] contract:
//!
//! 1. [`CurveNode::requirements`] to collect the quotes to load
//! 2. [`CurveNode::date`] / [`CurveNode::metadata`] to lay out the curve grid
//! 3. [`CurveNode::trade`] / [`CurveNode::resolved_trade`] to price while solving
//! 4. [`CurveNode::initial_guess`] to seed the solver
//!
//! Nodes are immutable values; every method is a pure function of the node
//! and its arguments, so a node may be shared freely between threads.

mod date;
mod metadata;
mod order;
mod repo;

pub use date::CurveNodeDate;
pub use metadata::DatedParameterMetadata;
pub use order::{ClashResolution, CurveNodeClashAction, CurveNodeDateOrder};
pub use repo::{RepoCurveNode, RepoCurveNodeBuilder};

use std::collections::BTreeSet;

use carry_core::Date;
use tracing::debug;

use crate::error::CurveResult;
use crate::market::{MarketData, QuoteId, ReferenceData};
use crate::value_type::ValueType;

/// The contract every curve node satisfies.
pub trait CurveNode: Send + Sync {
    /// Trade synthesized for calibration.
    type Trade;
    /// The same trade after resolution against reference data.
    type ResolvedTrade;

    /// Quotes the node needs from market data.
    fn requirements(&self) -> BTreeSet<QuoteId>;

    /// Display label of the node.
    fn label(&self) -> &str;

    /// Ordering rule against the previous node on the curve.
    fn date_order(&self) -> CurveNodeDateOrder;

    /// The node's date on the curve.
    fn date(&self, valuation_date: Date, ref_data: &dyn ReferenceData) -> CurveResult<Date>;

    /// Parameter metadata for the node, including its date.
    fn metadata(
        &self,
        valuation_date: Date,
        ref_data: &dyn ReferenceData,
    ) -> CurveResult<DatedParameterMetadata>;

    /// Builds the calibration trade.
    ///
    /// A positive quantity buys, anything else sells; the size is the
    /// absolute quantity.
    fn trade(
        &self,
        quantity: f64,
        market_data: &dyn MarketData,
        ref_data: &dyn ReferenceData,
    ) -> CurveResult<Self::Trade>;

    /// Builds and resolves the calibration trade.
    fn resolved_trade(
        &self,
        quantity: f64,
        market_data: &dyn MarketData,
        ref_data: &dyn ReferenceData,
    ) -> CurveResult<Self::ResolvedTrade>;

    /// A cheap starting value for the solver in the requested representation.
    fn initial_guess(
        &self,
        market_data: &dyn MarketData,
        value_type: ValueType,
    ) -> CurveResult<f64>;
}

/// A node that survived grid layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutNode {
    /// Position of the node in the input slice.
    pub index: usize,
    /// Metadata computed for the node.
    pub metadata: DatedParameterMetadata,
}

/// Lays out nodes on a curve grid.
///
/// Nodes are sorted by date (ties keep input order) and each node's
/// [`CurveNodeDateOrder`] is applied against the node kept before it.
///
/// # Errors
///
/// Fails if any node's metadata fails, or if a clash occurs under the
/// `Exception` action.
pub fn layout_nodes<N: CurveNode>(
    nodes: &[N],
    valuation_date: Date,
    ref_data: &dyn ReferenceData,
) -> CurveResult<Vec<LaidOutNode>> {
    let mut entries = nodes
        .iter()
        .enumerate()
        .map(|(index, node)| {
            Ok(LaidOutNode {
                index,
                metadata: node.metadata(valuation_date, ref_data)?,
            })
        })
        .collect::<CurveResult<Vec<_>>>()?;
    entries.sort_by_key(|entry| (entry.metadata.date(), entry.index));

    let mut kept: Vec<LaidOutNode> = Vec::with_capacity(entries.len());
    for entry in entries {
        let order = nodes[entry.index].date_order();
        let mut keep = true;
        while let Some(previous) = kept.last() {
            let resolution = order.resolve_clash(
                previous.metadata.label(),
                previous.metadata.date(),
                entry.metadata.label(),
                entry.metadata.date(),
            )?;
            match resolution {
                ClashResolution::Keep => break,
                ClashResolution::DropThis => {
                    keep = false;
                    break;
                }
                ClashResolution::DropOther => {
                    debug!(
                        dropped = previous.metadata.label(),
                        kept = entry.metadata.label(),
                        "Curve node dropped by date order"
                    );
                    kept.pop();
                }
            }
        }
        if keep {
            kept.push(entry);
        } else {
            debug!(
                dropped = entry.metadata.label(),
                "Curve node dropped by its own date order"
            );
        }
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CurveError;
    use crate::instruments::{RepoConvention, RepoTemplate};
    use crate::market::ImmutableReferenceData;
    use carry_core::Tenor;

    fn valuation() -> Date {
        Date::from_ymd(2025, 3, 14).unwrap()
    }

    fn node(tenor: Tenor, label: &str) -> RepoCurveNode {
        RepoCurveNode::of_label(
            RepoTemplate::of(tenor, RepoConvention::gbp_repo()),
            QuoteId::of("OG-Ticker", format!("GBP-REPO-{label}")),
            0.0,
            label,
        )
    }

    fn labels(laid_out: &[LaidOutNode]) -> Vec<&str> {
        laid_out.iter().map(|n| n.metadata.label()).collect()
    }

    #[test]
    fn test_layout_sorts_by_date() {
        let rd = ImmutableReferenceData::standard();
        let nodes = vec![
            node(Tenor::TENOR_6M, "6M"),
            node(Tenor::TENOR_1M, "1M"),
            node(Tenor::TENOR_3M, "3M"),
        ];
        let laid_out = layout_nodes(&nodes, valuation(), &rd).unwrap();
        assert_eq!(labels(&laid_out), vec!["1M", "3M", "6M"]);
        assert_eq!(laid_out[0].index, 1);
    }

    #[test]
    fn test_layout_clash_raises_by_default() {
        let rd = ImmutableReferenceData::standard();
        // Same date as the adjusted 3M end
        let fixed = node(Tenor::TENOR_1M, "FIX")
            .with_date(CurveNodeDate::Fixed(Date::from_ymd(2025, 6, 16).unwrap()));
        let nodes = vec![node(Tenor::TENOR_3M, "3M"), fixed];
        let err = layout_nodes(&nodes, valuation(), &rd).unwrap_err();
        assert!(matches!(err, CurveError::DateClash { .. }));
    }

    #[test]
    fn test_layout_drop_this() {
        let rd = ImmutableReferenceData::standard();
        let order = CurveNodeDateOrder::of(5, CurveNodeClashAction::DropThis).unwrap();
        let late = node(Tenor::TENOR_1M, "FIX")
            .to_builder()
            .date(CurveNodeDate::Fixed(Date::from_ymd(2025, 6, 18).unwrap()))
            .date_order(order)
            .build()
            .unwrap();
        let nodes = vec![node(Tenor::TENOR_3M, "3M"), late];
        let laid_out = layout_nodes(&nodes, valuation(), &rd).unwrap();
        assert_eq!(labels(&laid_out), vec!["3M"]);
    }

    #[test]
    fn test_layout_drop_other() {
        let rd = ImmutableReferenceData::standard();
        let order = CurveNodeDateOrder::of(5, CurveNodeClashAction::DropOther).unwrap();
        let late = node(Tenor::TENOR_1M, "FIX")
            .to_builder()
            .date(CurveNodeDate::Fixed(Date::from_ymd(2025, 6, 18).unwrap()))
            .date_order(order)
            .build()
            .unwrap();
        let nodes = vec![node(Tenor::TENOR_1M, "1M"), node(Tenor::TENOR_3M, "3M"), late];
        let laid_out = layout_nodes(&nodes, valuation(), &rd).unwrap();
        assert_eq!(labels(&laid_out), vec!["1M", "FIX"]);
        assert_eq!(laid_out[1].index, 2);
    }

    #[test]
    fn test_layout_propagates_node_failure() {
        let rd = ImmutableReferenceData::standard();
        let nodes = vec![
            node(Tenor::TENOR_1M, "1M"),
            node(Tenor::TENOR_3M, "3M").with_date(CurveNodeDate::LastFixing),
        ];
        assert!(layout_nodes(&nodes, valuation(), &rd)
            .unwrap_err()
            .is_unsupported_operation());
    }
}
