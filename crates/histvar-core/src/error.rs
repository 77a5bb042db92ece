//! Error types for the HistVaR core types.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while constructing core types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// The same date appears more than once in a price series.
    #[error("Duplicate date {date} in series '{series}' at position {position}")]
    DuplicateDate {
        /// Series name.
        series: String,
        /// The repeated date.
        date: String,
        /// Zero-based position of the second occurrence.
        position: usize,
    },

    /// Dates in a price series are neither ascending nor descending.
    #[error("Series '{series}' is not monotonic in date: {date} at position {position} breaks the order")]
    UnorderedSeries {
        /// Series name.
        series: String,
        /// The first out-of-order date.
        date: String,
        /// Zero-based position of the out-of-order date.
        position: usize,
    },

    /// Parallel date and value vectors differ in length.
    #[error("Length mismatch in '{label}': {dates} dates but {values} values")]
    LengthMismatch {
        /// Label of the offending vector.
        label: String,
        /// Number of dates.
        dates: usize,
        /// Number of values.
        values: usize,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }
}
