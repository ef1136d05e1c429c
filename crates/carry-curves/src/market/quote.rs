//! Quote identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CurveError, CurveResult};

/// Name of the field of a market data record that a quote refers to.
#[derive(Debug, Clone, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(String);

impl FieldName {
    /// The field holding the market value of the observable.
    pub const MARKET_VALUE: &'static str = "MarketValue";

    /// Create a new field name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The `MarketValue` field.
    pub fn market_value() -> Self {
        Self::new(Self::MARKET_VALUE)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FieldName {
    fn default() -> Self {
        Self::market_value()
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a market quote: `scheme~value/field`.
///
/// The field defaults to `MarketValue`, so `OG-Ticker~GBP-REPO-3M` and
/// `OG-Ticker~GBP-REPO-3M/MarketValue` name the same quote.
#[derive(Debug, Clone, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuoteId {
    scheme: String,
    value: String,
    field: FieldName,
}

impl QuoteId {
    /// Creates a quote ID for the market value of `scheme~value`.
    pub fn of(scheme: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_field(scheme, value, FieldName::market_value())
    }

    /// Creates a quote ID for an explicit field.
    pub fn with_field(
        scheme: impl Into<String>,
        value: impl Into<String>,
        field: FieldName,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            value: value.into(),
            field,
        }
    }

    /// Parses `scheme~value` or `scheme~value/field`.
    pub fn parse(s: &str) -> CurveResult<Self> {
        let text = s.trim();
        let (id, field) = match text.rsplit_once('/') {
            Some((id, field)) if !field.is_empty() => (id, FieldName::new(field)),
            Some(_) => return Err(CurveError::config(format!("empty field in quote ID '{s}'"))),
            None => (text, FieldName::market_value()),
        };
        match id.split_once('~') {
            Some((scheme, value)) if !scheme.is_empty() && !value.is_empty() => {
                Ok(Self::with_field(scheme, value, field))
            }
            _ => Err(CurveError::config(format!(
                "quote ID '{s}' must have the form scheme~value[/field]"
            ))),
        }
    }

    /// The identifier scheme, e.g. `OG-Ticker`.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The identifier value within the scheme.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The field of the observable.
    pub fn field(&self) -> &FieldName {
        &self.field
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~{}/{}", self.scheme, self.value, self.field)
    }
}

impl FromStr for QuoteId {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuoteId::parse(s)
    }
}

impl TryFrom<String> for QuoteId {
    type Error = CurveError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        QuoteId::parse(&s)
    }
}

impl From<QuoteId> for String {
    fn from(id: QuoteId) -> Self {
        id.to_string()
    }
}
