//! Parameter metadata describing a curve node.

use serde::{Deserialize, Serialize};
use std::fmt;

use carry_core::{Date, Tenor};

/// Describes the curve parameter a node calibrates.
///
/// A node pinned to a literal date carries only a label; a node whose date
/// rolls with its instrument also carries the tenor, so the parameter can be
/// re-dated when the valuation date moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatedParameterMetadata {
    /// A labelled literal date.
    LabelDate {
        /// Node date.
        date: Date,
        /// Display label.
        label: String,
    },
    /// A date derived from a tenor.
    TenorDate {
        /// Node date.
        date: Date,
        /// Instrument tenor.
        tenor: Tenor,
        /// Display label.
        label: String,
    },
}

impl DatedParameterMetadata {
    /// Metadata for a literal date.
    pub fn label_date(date: Date, label: impl Into<String>) -> Self {
        Self::LabelDate {
            date,
            label: label.into(),
        }
    }

    /// Metadata for a tenor-derived date.
    pub fn tenor_date(date: Date, tenor: Tenor, label: impl Into<String>) -> Self {
        Self::TenorDate {
            date,
            tenor,
            label: label.into(),
        }
    }

    /// The date of the parameter.
    pub fn date(&self) -> Date {
        match self {
            Self::LabelDate { date, .. } | Self::TenorDate { date, .. } => *date,
        }
    }

    /// The display label.
    pub fn label(&self) -> &str {
        match self {
            Self::LabelDate { label, .. } | Self::TenorDate { label, .. } => label,
        }
    }

    /// The tenor, for tenor-derived parameters.
    pub fn tenor(&self) -> Option<&Tenor> {
        match self {
            Self::LabelDate { .. } => None,
            Self::TenorDate { tenor, .. } => Some(tenor),
        }
    }

    /// Identifier used to match parameters across curves: the tenor when
    /// there is one, otherwise the label.
    pub fn identifier(&self) -> String {
        match self {
            Self::LabelDate { label, .. } => label.clone(),
            Self::TenorDate { tenor, .. } => tenor.to_string(),
        }
    }
}

impl fmt::Display for DatedParameterMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_date() {
        let date = Date::from_ymd(2025, 6, 30).unwrap();
        let meta = DatedParameterMetadata::label_date(date, "Jun25");
        assert_eq!(meta.date(), date);
        assert_eq!(meta.label(), "Jun25");
        assert_eq!(meta.tenor(), None);
        assert_eq!(meta.identifier(), "Jun25");
        assert_eq!(meta.to_string(), "Jun25 (2025-06-30)");
    }

    #[test]
    fn test_tenor_date() {
        let date = Date::from_ymd(2025, 6, 16).unwrap();
        let meta = DatedParameterMetadata::tenor_date(date, Tenor::TENOR_3M, "GC 3M");
        assert_eq!(meta.tenor(), Some(&Tenor::TENOR_3M));
        assert_eq!(meta.label(), "GC 3M");
        assert_eq!(meta.identifier(), "3M");
    }
}
