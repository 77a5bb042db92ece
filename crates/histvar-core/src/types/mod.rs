//! Domain types.

mod date;
mod pnl;
mod series;

pub use date::Date;
pub use pnl::PnlVector;
pub use series::{SeriesOrder, TimeSeries};
