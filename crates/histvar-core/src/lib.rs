//! # HistVaR Core
//!
//! Core types shared by the HistVaR historical-simulation risk crates.
//!
//! This crate provides the foundational building blocks used throughout HistVaR:
//!
//! - **Date**: A calendar date newtype over `chrono::NaiveDate`
//! - **TimeSeries**: One instrument's price history, held in ascending date order
//! - **PnlVector**: Per-date profit-and-loss scenarios aligned to a series' date index
//!
//! ## Example
//!
//! ```rust
//! use histvar_core::prelude::*;
//!
//! let d0 = Date::from_ymd(2024, 1, 2).unwrap();
//! let d1 = Date::from_ymd(2024, 1, 3).unwrap();
//!
//! // Points may arrive newest-first; the series is stored oldest-first.
//! let series = TimeSeries::new("ccy-1", vec![(d1, 1.10), (d0, 1.08)]).unwrap();
//! assert_eq!(series.first_date(), Some(d0));
//! assert_eq!(series.order(), SeriesOrder::Descending);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Date, PnlVector, SeriesOrder, TimeSeries};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Date, PnlVector, SeriesOrder, TimeSeries};
