//! Market data lookup.

use std::collections::HashMap;

use carry_core::Date;

use super::QuoteId;
use crate::error::{CurveError, CurveResult};

/// Read access to market quotes as of a valuation date.
///
/// Implementations must be safe to share across calibration threads.
pub trait MarketData: Send + Sync {
    /// The date the quotes are observed on.
    fn valuation_date(&self) -> Date;

    /// Finds the value of a quote, if present.
    fn find_value(&self, id: &QuoteId) -> Option<f64>;

    /// Returns the value of a quote.
    ///
    /// # Errors
    ///
    /// `CurveError::MissingMarketData` if the quote is absent.
    fn value(&self, id: &QuoteId) -> CurveResult<f64> {
        self.find_value(id)
            .ok_or_else(|| CurveError::missing_market_data(id.to_string()))
    }

    /// Returns true if the quote is present.
    fn contains(&self, id: &QuoteId) -> bool {
        self.find_value(id).is_some()
    }
}

/// A fixed snapshot of quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct ImmutableMarketData {
    valuation_date: Date,
    values: HashMap<QuoteId, f64>,
}

impl ImmutableMarketData {
    /// Creates market data from a map of values.
    pub fn of(valuation_date: Date, values: HashMap<QuoteId, f64>) -> Self {
        Self {
            valuation_date,
            values,
        }
    }

    /// Starts a builder for the given valuation date.
    pub fn builder(valuation_date: Date) -> ImmutableMarketDataBuilder {
        ImmutableMarketDataBuilder {
            valuation_date,
            values: HashMap::new(),
        }
    }

    /// Number of quotes held.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no quotes are held.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the quote IDs held.
    pub fn ids(&self) -> impl Iterator<Item = &QuoteId> {
        self.values.keys()
    }
}

impl MarketData for ImmutableMarketData {
    fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    fn find_value(&self, id: &QuoteId) -> Option<f64> {
        self.values.get(id).copied()
    }
}

/// Builder for [`ImmutableMarketData`].
#[derive(Debug, Clone)]
pub struct ImmutableMarketDataBuilder {
    valuation_date: Date,
    values: HashMap<QuoteId, f64>,
}

impl ImmutableMarketDataBuilder {
    /// Adds (or replaces) a quote value.
    #[must_use]
    pub fn add_value(mut self, id: QuoteId, value: f64) -> Self {
        self.values.insert(id, value);
        self
    }

    /// Adds several quote values.
    #[must_use]
    pub fn add_values(mut self, values: impl IntoIterator<Item = (QuoteId, f64)>) -> Self {
        self.values.extend(values);
        self
    }

    /// Finishes the snapshot.
    #[must_use]
    pub fn build(self) -> ImmutableMarketData {
        ImmutableMarketData::of(self.valuation_date, self.values)
    }
}
