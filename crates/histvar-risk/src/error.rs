//! Error types for risk calculations.

use histvar_core::{CoreError, Date};
use thiserror::Error;

use crate::returns::DomainError;

/// A specialized Result type for risk calculations.
pub type RiskResult<T> = Result<T, RiskError>;

/// Errors that can occur during a VaR run.
///
/// None of these are transient: every variant describes a problem with the
/// input data or configuration.
#[derive(Debug, Error)]
pub enum RiskError {
    /// A return estimator rejected a pair of prices.
    #[error("invalid price data for '{instrument}' on {date} (position {position}): {source}")]
    Domain {
        /// Instrument whose series contains the bad observation.
        instrument: String,
        /// Date of the later observation of the pair.
        date: Date,
        /// Zero-based position of that observation in the ascending series.
        position: usize,
        /// What the estimator rejected.
        source: DomainError,
    },

    /// PnL vectors do not share one date index.
    #[error(
        "date index of '{label}' does not match '{reference}': expected {expected_len} dates, \
         found {actual_len}, first difference at position {position}"
    )]
    IndexMismatch {
        /// The vector that disagrees.
        label: String,
        /// The vector whose index is taken as the reference.
        reference: String,
        /// Reference index length.
        expected_len: usize,
        /// Offending index length.
        actual_len: usize,
        /// First position at which the indices differ.
        position: usize,
    },

    /// Too few PnL scenarios for the rank interpolation.
    #[error("insufficient data: need at least {required} PnL scenarios, got {actual}")]
    InsufficientData {
        /// Minimum number of scenarios.
        required: usize,
        /// Number of scenarios available.
        actual: usize,
    },

    /// No instruments were configured.
    #[error("portfolio has no instruments configured")]
    EmptyPortfolio,

    /// Invalid input parameters
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Error from the core types.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl RiskError {
    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}
