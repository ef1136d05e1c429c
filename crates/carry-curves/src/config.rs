//! TOML configuration for groups of repo curve nodes.
//!
//! A group shares one repo convention and lists one entry per node:
//!
//! ```toml
//! name = "GBP-REPO"
//!
//! [convention]
//! name = "GBP-REPO"
//! spot_days = 0
//! day_count = "Act365Fixed"
//! business_day_adjustment = { convention = "ModifiedFollowing", calendar = "SatSun" }
//!
//! [[nodes]]
//! tenor = "1M"
//! quote = "OG-Ticker~GBP-REPO-1M"
//!
//! [[nodes]]
//! tenor = "3M"
//! quote = "OG-Ticker~GBP-REPO-3M"
//! spread = 0.0005
//! date_order = { min_gap_in_days = 2, action = "DropOther" }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use carry_core::Tenor;
use tracing::debug;

use crate::error::{CurveError, CurveResult};
use crate::instruments::{RepoConvention, RepoTemplate};
use crate::market::QuoteId;
use crate::nodes::{CurveNodeDate, CurveNodeDateOrder, RepoCurveNode};

/// One node in a [`NodeGroupConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeEntry {
    /// Repo tenor.
    pub tenor: Tenor,
    /// Quote supplying the node's rate.
    pub quote: QuoteId,
    /// Spread added to the quote.
    #[serde(default)]
    pub spread: f64,
    /// Label; defaults to the tenor.
    pub label: Option<String>,
    /// Date policy; defaults to `End`.
    #[serde(default)]
    pub date: CurveNodeDate,
    /// Date order; defaults to a one-day gap with `Exception`.
    pub date_order: Option<CurveNodeDateOrder>,
}

/// A named group of repo nodes sharing a convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeGroupConfig {
    /// Group name.
    pub name: String,
    /// Convention for every node in the group.
    pub convention: RepoConvention,
    /// Node entries, in curve order.
    #[serde(default)]
    pub nodes: Vec<NodeEntry>,
}

impl NodeGroupConfig {
    /// Parses a group from TOML text.
    pub fn from_toml_str(content: &str) -> CurveResult<Self> {
        toml::from_str(content).map_err(|e| CurveError::config(e.to_string()))
    }

    /// Loads a group from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> CurveResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CurveError::config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Builds the configured nodes.
    ///
    /// # Errors
    ///
    /// `CurveError::Config` if the group has no nodes or two nodes share a
    /// quote; `CurveError::InvalidNode` if an entry is invalid.
    pub fn build_nodes(&self) -> CurveResult<Vec<RepoCurveNode>> {
        if self.nodes.is_empty() {
            return Err(CurveError::config(format!(
                "node group '{}' has no nodes",
                self.name
            )));
        }

        let mut seen = HashSet::with_capacity(self.nodes.len());
        let nodes = self
            .nodes
            .iter()
            .map(|entry| {
                if !seen.insert(&entry.quote) {
                    return Err(CurveError::config(format!(
                        "node group '{}' uses quote {} more than once",
                        self.name, entry.quote
                    )));
                }
                let mut builder = RepoCurveNode::builder()
                    .template(RepoTemplate::of(entry.tenor, self.convention.clone()))
                    .rate_id(entry.quote.clone())
                    .additional_spread(entry.spread)
                    .date(entry.date);
                if let Some(label) = &entry.label {
                    builder = builder.label(label.clone());
                }
                if let Some(order) = entry.date_order {
                    builder = builder.date_order(order);
                }
                builder.build()
            })
            .collect::<CurveResult<Vec<_>>>()?;

        debug!(group = %self.name, count = nodes.len(), "Built repo curve nodes");
        Ok(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{CurveNode, CurveNodeClashAction};
    use carry_core::Date;

    const GROUP: &str = r#"
name = "GBP-REPO"

[convention]
name = "GBP-REPO"
spot_days = 0
day_count = "Act365Fixed"
business_day_adjustment = { convention = "ModifiedFollowing", calendar = "SatSun" }

[[nodes]]
tenor = "1M"
quote = "OG-Ticker~GBP-REPO-1M"

[[nodes]]
tenor = "3M"
quote = "OG-Ticker~GBP-REPO-3M"
spread = 0.0005
label = "GC 3M"
date_order = { min_gap_in_days = 2, action = "DropOther" }

[[nodes]]
tenor = "6M"
quote = "OG-Ticker~GBP-REPO-6M"
date = { Fixed = "2025-09-30" }
"#;

    #[test]
    fn test_parse_and_build() {
        let config = NodeGroupConfig::from_toml_str(GROUP).unwrap();
        assert_eq!(config.convention, RepoConvention::gbp_repo());
        assert_eq!(config.nodes.len(), 3);

        let nodes = config.build_nodes().unwrap();
        assert_eq!(nodes[0].label(), "1M");
        assert_eq!(nodes[0].date_order(), CurveNodeDateOrder::DEFAULT);

        assert_eq!(nodes[1].label(), "GC 3M");
        assert_eq!(nodes[1].additional_spread(), 0.0005);
        assert_eq!(nodes[1].date_order().min_gap_in_days(), 2);
        assert_eq!(nodes[1].date_order().action(), CurveNodeClashAction::DropOther);

        assert_eq!(
            nodes[2].date_policy(),
            CurveNodeDate::Fixed(Date::from_ymd(2025, 9, 30).unwrap())
        );
        assert_eq!(nodes[2].template().tenor(), &Tenor::TENOR_6M);
    }

    #[test]
    fn test_empty_group_rejected() {
        let config = NodeGroupConfig {
            name: "EMPTY".to_string(),
            convention: RepoConvention::usd_repo(),
            nodes: Vec::new(),
        };
        assert!(matches!(config.build_nodes(), Err(CurveError::Config { .. })));
    }

    #[test]
    fn test_duplicate_quote_rejected() {
        let mut config = NodeGroupConfig::from_toml_str(GROUP).unwrap();
        let mut duplicate = config.nodes[0].clone();
        duplicate.tenor = Tenor::TENOR_1Y;
        config.nodes.push(duplicate);
        assert!(matches!(config.build_nodes(), Err(CurveError::Config { .. })));
    }

    #[test]
    fn test_zero_gap_rejected_on_parse() {
        let text = GROUP.replace("min_gap_in_days = 2", "min_gap_in_days = 0");
        assert!(matches!(
            NodeGroupConfig::from_toml_str(&text),
            Err(CurveError::Config { .. })
        ));
    }

    #[test]
    fn test_bad_quote_rejected_on_parse() {
        let text = GROUP.replace("OG-Ticker~GBP-REPO-1M", "no-separator");
        assert!(NodeGroupConfig::from_toml_str(&text).is_err());
    }

    #[test]
    fn test_bad_tenor_rejected_on_parse() {
        for tenor in ["3é", "+3M", "3Q"] {
            let text = GROUP.replace("tenor = \"1M\"", &format!("tenor = \"{tenor}\""));
            assert!(matches!(
                NodeGroupConfig::from_toml_str(&text),
                Err(CurveError::Config { .. })
            ));
        }
    }

    #[test]
    fn test_missing_file() {
        let err = NodeGroupConfig::from_file("/nonexistent/carry/nodes.toml").unwrap_err();
        assert!(matches!(err, CurveError::Config { .. }));
    }
}
