//! Market and reference data seen by curve nodes.
//!
//! - [`QuoteId`]: identifies a single observable market value
//! - [`MarketData`]: quote lookup as of a valuation date
//! - [`ReferenceData`]: static data needed to resolve trades (holiday calendars)

mod market_data;
mod quote;
mod reference_data;

pub use market_data::{ImmutableMarketData, ImmutableMarketDataBuilder, MarketData};
pub use quote::{FieldName, QuoteId};
pub use reference_data::{ImmutableReferenceData, ReferenceData};
