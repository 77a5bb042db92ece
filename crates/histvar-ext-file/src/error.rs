//! Error types for price file loading.

use std::path::PathBuf;

use histvar_core::CoreError;
use thiserror::Error;

/// Result type for file operations.
pub type FileResult<T> = Result<T, FileError>;

/// Errors raised while reading a price file.
#[derive(Debug, Error)]
pub enum FileError {
    /// File could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited text (e.g. a row with the wrong number of fields).
    #[error("malformed price file: {0}")]
    Csv(#[from] csv::Error),

    /// First header is not `date`.
    #[error("first column must be 'date', found '{found}'")]
    MissingDateColumn {
        /// Header actually found.
        found: String,
    },

    /// Header names the same instrument twice.
    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),

    /// Requested instrument is not in the file.
    #[error("unknown instrument column '{column}' (available: {available})")]
    UnknownColumn {
        /// Requested column.
        column: String,
        /// Comma-separated list of instrument columns.
        available: String,
    },

    /// Date cell does not match the configured format.
    #[error("line {line}: cannot parse date '{value}' with format '{format}'")]
    InvalidDate {
        /// 1-based line number.
        line: u64,
        /// Cell contents.
        value: String,
        /// Expected format.
        format: String,
    },

    /// Price cell is not a number.
    #[error("line {line}: cannot parse price '{value}' in column '{column}'")]
    InvalidPrice {
        /// 1-based line number.
        line: u64,
        /// Instrument column.
        column: String,
        /// Cell contents.
        value: String,
    },

    /// Dates are duplicated or out of order.
    #[error(transparent)]
    Series(#[from] CoreError),
}
