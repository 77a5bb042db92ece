//! # HistVaR Ext File
//!
//! File-based price history for the HistVaR risk library.
//!
//! Price files are delimited text with a `date` column followed by one
//! column per instrument:
//!
//! ```text
//! date        ccy-1   ccy-2
//! 02/01/2024  1.2345  0.8765
//! 01/01/2024  1.2301  0.8790
//! ```
//!
//! Rows may be in either date order; every extracted [`TimeSeries`] is
//! oldest-first.
//!
//! [`TimeSeries`]: histvar_core::TimeSeries

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod price_table;

pub use error::{FileError, FileResult};
pub use price_table::{PriceFileOptions, PriceTable, DATE_COLUMN, DEFAULT_DATE_FORMAT};
