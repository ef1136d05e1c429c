//! Error types for curve node operations.
//!
//! Three kinds of failure surface here: configuration errors raised while a
//! node is built, the unsupported-operation error for date policies a node
//! type cannot honour, and collaborator errors (missing quotes, missing
//! calendars, malformed instruments) passed through unchanged.

use carry_core::{CoreError, Date};
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve node operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// A curve node could not be constructed.
    #[error("Invalid curve node: {reason}")]
    InvalidNode {
        /// Description of the configuration problem.
        reason: String,
    },

    /// The operation is not available for this node type.
    #[error("Unsupported operation: {message}")]
    UnsupportedOperation {
        /// What was requested and why it is refused.
        message: String,
    },

    /// A quote required by a node is not in the market data.
    #[error("Market data not found for '{id}'")]
    MissingMarketData {
        /// Identifier of the missing quote.
        id: String,
    },

    /// An item of reference data (such as a holiday calendar) is missing.
    #[error("Reference data not found for '{id}'")]
    MissingReferenceData {
        /// Identifier of the missing item.
        id: String,
    },

    /// Invalid calibration instrument.
    #[error("Invalid instrument: {reason}")]
    InvalidInstrument {
        /// Description of what's wrong with the instrument.
        reason: String,
    },

    /// Two nodes are closer together than the date order allows.
    #[error("Curve node dates clash: '{label}' on {date} is within {min_gap_in_days} day(s) of '{previous_label}' on {previous_date}")]
    DateClash {
        /// Label of the later node.
        label: String,
        /// Date of the later node.
        date: Date,
        /// Label of the earlier node.
        previous_label: String,
        /// Date of the earlier node.
        previous_date: Date,
        /// Minimum gap required by the later node.
        min_gap_in_days: u32,
    },

    /// Node group configuration could not be read or validated.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the problem.
        reason: String,
    },

    /// Error from the date and calendar layer.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CurveError {
    /// Creates an invalid node error.
    #[must_use]
    pub fn invalid_node(reason: impl Into<String>) -> Self {
        Self::InvalidNode {
            reason: reason.into(),
        }
    }

    /// Creates an unsupported operation error.
    #[must_use]
    pub fn unsupported_operation(message: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            message: message.into(),
        }
    }

    /// Creates a missing market data error.
    #[must_use]
    pub fn missing_market_data(id: impl Into<String>) -> Self {
        Self::MissingMarketData { id: id.into() }
    }

    /// Creates a missing reference data error.
    #[must_use]
    pub fn missing_reference_data(id: impl Into<String>) -> Self {
        Self::MissingReferenceData { id: id.into() }
    }

    /// Creates an invalid instrument error.
    #[must_use]
    pub fn invalid_instrument(reason: impl Into<String>) -> Self {
        Self::InvalidInstrument {
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Returns true for the unsupported-operation error.
    #[must_use]
    pub fn is_unsupported_operation(&self) -> bool {
        matches!(self, Self::UnsupportedOperation { .. })
    }
}
