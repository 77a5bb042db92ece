//! # histvar-risk
//!
//! Historical-simulation Value at Risk for portfolios of priced instruments.
//!
//! The pipeline runs strictly downward:
//!
//! - **Returns**: a pluggable [`ReturnEstimator`] turns two adjacent prices
//!   into a return over the risk horizon (default: log return scaled by √horizon)
//! - **PnL**: each instrument's series becomes a per-date PnL vector
//!   (notional × estimated return)
//! - **Aggregation**: instrument vectors are summed date by date
//! - **VaR**: the 99% VaR interpolates the 2nd and 3rd worst portfolio PnLs
//!
//! [`VarCalculationEngine`] runs all four steps over a list of
//! [`InstrumentConfig`]s.
//!
//! ## Example
//!
//! ```rust
//! use histvar_core::{Date, TimeSeries};
//! use histvar_risk::prelude::*;
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let prices = [100.0, 99.0, 101.0, 97.0, 96.0, 100.0];
//! let points = prices.iter().enumerate().map(|(i, p)| (start + i as i64, *p)).collect();
//! let series = TimeSeries::new("ccy-1", points).unwrap();
//!
//! let config = InstrumentConfig::new(series, 1_000_000.0);
//! let var = VarCalculationEngine::new().run(&[config]).unwrap();
//! assert!(var < 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod engine;
mod error;
pub mod pnl;
pub mod returns;
pub mod var;

pub use aggregate::{aggregate_pnl, aggregate_pnl_over, PORTFOLIO_LABEL};
pub use engine::{InstrumentConfig, VarCalculationEngine};
pub use error::{RiskError, RiskResult};
pub use pnl::{build_labelled_pnl_vector, build_pnl_vector};
pub use returns::{
    AbsoluteShift, DomainError, EstimatorKind, LogShift, ReturnEstimator, SimpleShift,
};
pub use var::{historical_var_99, tail_scenarios_99, Scenario, TailScenarios, VarReport};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::aggregate::*;
    pub use crate::engine::*;
    pub use crate::pnl::*;
    pub use crate::returns::*;
    pub use crate::var::*;
    pub use crate::{RiskError, RiskResult};
}
