//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Position argument is not `COLUMN=NOTIONAL`.
    #[error("Invalid position '{0}'. Use COLUMN=NOTIONAL, e.g. ccy-1=153084.81.")]
    InvalidPosition(String),

    /// Delimiter is not a single ASCII character.
    #[error("Invalid delimiter '{0}'. Use a single ASCII character or 'tab'.")]
    InvalidDelimiter(String),

    /// Missing required argument.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
