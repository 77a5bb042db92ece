//! CLI command implementations.

pub mod price;
pub mod var;

pub use price::PriceArgs;
pub use var::VarArgs;

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{CliError, CliResult};

/// Parses a `COLUMN=NOTIONAL` position.
pub fn parse_position(s: &str) -> CliResult<(String, Decimal)> {
    let (column, notional) = s
        .rsplit_once('=')
        .ok_or_else(|| CliError::InvalidPosition(s.to_string()))?;

    let column = column.trim();
    if column.is_empty() {
        return Err(CliError::InvalidPosition(s.to_string()));
    }

    let notional = Decimal::from_str(notional.trim())
        .or_else(|_| Decimal::from_scientific(notional.trim()))
        .map_err(|_| CliError::InvalidPosition(s.to_string()))?;

    Ok((column.to_string(), notional))
}

/// Parses a field delimiter: a single ASCII character, `tab` or `\t`.
pub fn parse_delimiter(s: &str) -> CliResult<char> {
    match s {
        "tab" | "\\t" | "\t" => return Ok('\t'),
        _ => {}
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c),
        _ => Err(CliError::InvalidDelimiter(s.to_string())),
    }
}
