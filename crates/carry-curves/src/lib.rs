//! # Carry Curves
//!
//! Curve calibration nodes for repo curves.
//!
//! A curve node binds one market quote to one instrument template and
//! answers the questions a bootstrapper asks while laying out and solving
//! a curve:
//!
//! - **Requirements**: which quotes must be present in market data
//! - **Dates**: where the node sits on the curve grid
//! - **Metadata**: how the node's parameter is described (tenor or fixed date)
//! - **Trades**: the calibration trade priced during solving
//! - **Initial guess**: a solver seed for the requested value type
//!
//! ## Quick Start
//!
//! ```rust
//! use carry_curves::prelude::*;
//!
//! let valuation = Date::from_ymd(2025, 3, 14).unwrap();
//! let template = RepoTemplate::of(Tenor::TENOR_3M, RepoConvention::gbp_repo());
//! let rate_id = QuoteId::of("OG-Ticker", "GBP-REPO-3M");
//! let node = RepoCurveNode::of(template, rate_id.clone());
//!
//! let market_data = ImmutableMarketData::builder(valuation)
//!     .add_value(rate_id, 0.0425)
//!     .build();
//! let ref_data = ImmutableReferenceData::standard();
//!
//! let guess = node
//!     .initial_guess(&market_data, ValueType::ZeroRate)
//!     .unwrap();
//! assert_eq!(guess, 0.0425);
//!
//! let end = node.date(valuation, &ref_data).unwrap();
//! assert_eq!(end, Date::from_ymd(2025, 6, 16).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod instruments;
pub mod market;
pub mod nodes;
pub mod value_type;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use carry_core::prelude::*;

    pub use crate::config::{NodeEntry, NodeGroupConfig};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::instruments::{
        BuySell, Repo, RepoConvention, RepoTemplate, RepoTrade, ResolvedRepo, ResolvedRepoTrade,
    };
    pub use crate::market::{
        FieldName, ImmutableMarketData, ImmutableMarketDataBuilder, ImmutableReferenceData,
        MarketData, QuoteId, ReferenceData,
    };
    pub use crate::nodes::{
        layout_nodes, CurveNode, CurveNodeClashAction, CurveNodeDate, CurveNodeDateOrder,
        DatedParameterMetadata, RepoCurveNode, RepoCurveNodeBuilder,
    };
    pub use crate::value_type::ValueType;
}

pub use error::{CurveError, CurveResult};
pub use nodes::{CurveNode, RepoCurveNode};
pub use value_type::ValueType;
