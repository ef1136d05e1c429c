//! Curve node backed by a term repo.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use carry_core::Date;
use tracing::{debug, warn};

use super::{CurveNode, CurveNodeDate, CurveNodeDateOrder, DatedParameterMetadata};
use crate::error::{CurveError, CurveResult};
use crate::instruments::{BuySell, RepoTemplate, RepoTrade, ResolvedRepoTrade};
use crate::market::{MarketData, QuoteId, ReferenceData};
use crate::value_type::ValueType;

/// A curve node whose instrument is a term repo.
///
/// The node's rate is read from market data under `rate_id`, plus
/// `additional_spread`. By default the node sits on the repo's end date
/// and is labelled with the repo tenor.
///
/// # Example
///
/// ```rust
/// use carry_curves::prelude::*;
///
/// let template = RepoTemplate::of(Tenor::TENOR_1M, RepoConvention::usd_repo());
/// let node = RepoCurveNode::of_spread(template, QuoteId::of("BBG", "GC-1M"), 0.0005);
/// assert_eq!(node.label(), "1M");
///
/// let pinned = node.with_date(CurveNodeDate::Fixed(Date::from_ymd(2025, 4, 30).unwrap()));
/// assert_eq!(pinned.additional_spread(), 0.0005);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RepoCurveNodeBuilder")]
pub struct RepoCurveNode {
    template: RepoTemplate,
    rate_id: QuoteId,
    additional_spread: f64,
    label: String,
    date: CurveNodeDate,
    date_order: CurveNodeDateOrder,
}

impl RepoCurveNode {
    /// Creates a node with no spread, labelled by tenor, dated at the repo end.
    pub fn of(template: RepoTemplate, rate_id: QuoteId) -> Self {
        Self::of_spread(template, rate_id, 0.0)
    }

    /// Creates a node with an additional spread over the quote.
    pub fn of_spread(template: RepoTemplate, rate_id: QuoteId, additional_spread: f64) -> Self {
        Self::of_label(template, rate_id, additional_spread, "")
    }

    /// Creates a node with a spread and label.
    ///
    /// An empty label falls back to the template tenor.
    pub fn of_label(
        template: RepoTemplate,
        rate_id: QuoteId,
        additional_spread: f64,
        label: impl Into<String>,
    ) -> Self {
        let label = label.into();
        let label = if label.is_empty() {
            template.tenor().to_string()
        } else {
            label
        };
        Self {
            template,
            rate_id,
            additional_spread,
            label,
            date: CurveNodeDate::End,
            date_order: CurveNodeDateOrder::DEFAULT,
        }
    }

    /// Starts an empty builder.
    pub fn builder() -> RepoCurveNodeBuilder {
        RepoCurveNodeBuilder::default()
    }

    /// Returns a builder seeded with this node's fields.
    pub fn to_builder(&self) -> RepoCurveNodeBuilder {
        RepoCurveNodeBuilder {
            template: Some(self.template.clone()),
            rate_id: Some(self.rate_id.clone()),
            additional_spread: self.additional_spread,
            label: Some(self.label.clone()),
            date: Some(self.date),
            date_order: Some(self.date_order),
        }
    }

    /// Returns a copy of this node with a different date policy.
    #[must_use]
    pub fn with_date(&self, date: CurveNodeDate) -> Self {
        Self {
            date,
            ..self.clone()
        }
    }

    /// The repo template.
    pub fn template(&self) -> &RepoTemplate {
        &self.template
    }

    /// Identifier of the rate quote.
    pub fn rate_id(&self) -> &QuoteId {
        &self.rate_id
    }

    /// Spread added to the quote to get the trade rate.
    pub fn additional_spread(&self) -> f64 {
        self.additional_spread
    }

    /// The date policy.
    pub fn date_policy(&self) -> CurveNodeDate {
        self.date
    }

    // Zero notional and zero rate: the schedule does not depend on the economics.
    fn calculate_end(&self, valuation_date: Date, ref_data: &dyn ReferenceData) -> CurveResult<Date> {
        let trade = self
            .template
            .create_trade(valuation_date, BuySell::Buy, 0.0, 0.0, ref_data)?;
        let repo = trade.product().resolve(ref_data)?;
        debug!(
            label = %self.label,
            valuation_date = %valuation_date,
            end_date = %repo.end_date(),
            "Repo curve node end date"
        );
        Ok(repo.end_date())
    }
}

impl CurveNode for RepoCurveNode {
    type Trade = RepoTrade;
    type ResolvedTrade = ResolvedRepoTrade;

    fn requirements(&self) -> BTreeSet<QuoteId> {
        BTreeSet::from([self.rate_id.clone()])
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn date_order(&self) -> CurveNodeDateOrder {
        self.date_order
    }

    fn date(&self, valuation_date: Date, ref_data: &dyn ReferenceData) -> CurveResult<Date> {
        match self.date {
            CurveNodeDate::Fixed(date) => Ok(date),
            CurveNodeDate::End => self.calculate_end(valuation_date, ref_data),
            CurveNodeDate::LastFixing => {
                warn!(label = %self.label, "LastFixing date requested for repo curve node");
                Err(CurveError::unsupported_operation(
                    "Node date of 'LastFixing' is not supported for Repo",
                ))
            }
        }
    }

    fn metadata(
        &self,
        valuation_date: Date,
        ref_data: &dyn ReferenceData,
    ) -> CurveResult<DatedParameterMetadata> {
        let node_date = self.date(valuation_date, ref_data)?;
        if self.date.is_fixed() {
            return Ok(DatedParameterMetadata::label_date(node_date, self.label.clone()));
        }
        Ok(DatedParameterMetadata::tenor_date(
            node_date,
            *self.template.tenor(),
            self.label.clone(),
        ))
    }

    fn trade(
        &self,
        quantity: f64,
        market_data: &dyn MarketData,
        ref_data: &dyn ReferenceData,
    ) -> CurveResult<RepoTrade> {
        let fixed_rate = market_data.value(&self.rate_id)? + self.additional_spread;
        // Zero quantity sells.
        let buy_sell = if quantity > 0.0 {
            BuySell::Buy
        } else {
            BuySell::Sell
        };
        debug!(
            label = %self.label,
            %buy_sell,
            quantity,
            fixed_rate,
            "Repo curve node trade"
        );
        self.template.create_trade(
            market_data.valuation_date(),
            buy_sell,
            quantity.abs(),
            fixed_rate,
            ref_data,
        )
    }

    fn resolved_trade(
        &self,
        quantity: f64,
        market_data: &dyn MarketData,
        ref_data: &dyn ReferenceData,
    ) -> CurveResult<ResolvedRepoTrade> {
        self.trade(quantity, market_data, ref_data)?.resolve(ref_data)
    }

    fn initial_guess(
        &self,
        market_data: &dyn MarketData,
        value_type: ValueType,
    ) -> CurveResult<f64> {
        match value_type {
            rate if rate.is_rate_type() => market_data.value(&self.rate_id),
            ValueType::DiscountFactor => {
                let approximate_maturity = self.template.tenor().approximate_years();
                Ok((-approximate_maturity * market_data.value(&self.rate_id)?).exp())
            }
            _ => Ok(0.0),
        }
    }
}

impl fmt::Display for RepoCurveNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RepoCurveNode[{}: {}, rate={}, spread={}, date={}, order={}]",
            self.label,
            self.template,
            self.rate_id,
            self.additional_spread,
            self.date,
            self.date_order
        )
    }
}

/// Builder for [`RepoCurveNode`].
///
/// `build` defaults the date policy to `End`, the order to
/// [`CurveNodeDateOrder::DEFAULT`] and the label to the template tenor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoCurveNodeBuilder {
    template: Option<RepoTemplate>,
    rate_id: Option<QuoteId>,
    additional_spread: f64,
    label: Option<String>,
    date: Option<CurveNodeDate>,
    date_order: Option<CurveNodeDateOrder>,
}

impl RepoCurveNodeBuilder {
    /// Sets the repo template.
    #[must_use]
    pub fn template(mut self, template: RepoTemplate) -> Self {
        self.template = Some(template);
        self
    }

    /// Sets the rate quote identifier.
    #[must_use]
    pub fn rate_id(mut self, rate_id: QuoteId) -> Self {
        self.rate_id = Some(rate_id);
        self
    }

    /// Sets the additional spread.
    #[must_use]
    pub fn additional_spread(mut self, additional_spread: f64) -> Self {
        self.additional_spread = additional_spread;
        self
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the date policy.
    #[must_use]
    pub fn date(mut self, date: CurveNodeDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the date order.
    #[must_use]
    pub fn date_order(mut self, date_order: CurveNodeDateOrder) -> Self {
        self.date_order = Some(date_order);
        self
    }

    /// Validates and builds the node.
    ///
    /// # Errors
    ///
    /// `CurveError::InvalidNode` if the template or rate ID is missing, or
    /// if an explicitly set label is empty.
    pub fn build(self) -> CurveResult<RepoCurveNode> {
        let template = self
            .template
            .ok_or_else(|| CurveError::invalid_node("template must be specified"))?;
        let rate_id = self
            .rate_id
            .ok_or_else(|| CurveError::invalid_node("rate_id must be specified"))?;
        let label = self
            .label
            .unwrap_or_else(|| template.tenor().to_string());
        if label.is_empty() {
            return Err(CurveError::invalid_node("label must not be empty"));
        }

        Ok(RepoCurveNode {
            template,
            rate_id,
            additional_spread: self.additional_spread,
            label,
            date: self.date.unwrap_or_default(),
            date_order: self.date_order.unwrap_or_default(),
        })
    }
}

impl TryFrom<RepoCurveNodeBuilder> for RepoCurveNode {
    type Error = CurveError;

    fn try_from(builder: RepoCurveNodeBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
