//! # HistVaR
//!
//! Historical-simulation Value at Risk. This crate re-exports the public API
//! of the HistVaR workspace:
//!
//! | Module      | Crate              | Contents                                      |
//! |-------------|--------------------|-----------------------------------------------|
//! | [`core`]    | `histvar-core`     | `Date`, `TimeSeries`, `PnlVector`             |
//! | [`risk`]    | `histvar-risk`     | Return estimators, aggregation, 99% VaR engine |
//! | [`pricing`] | `histvar-pricing`  | Black-76 option pricer                        |
//! | [`file`]    | `histvar-ext-file` | Delimited price files                         |
//! | [`config`]  | `histvar-config`   | TOML/JSON run configuration                   |
//!
//! ```rust
//! use histvar::prelude::*;
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let prices = [100.0, 90.0, 85.5, 84.645, 90.0];
//! let points = prices.iter().enumerate().map(|(i, p)| (start + i as i64, *p)).collect();
//! let series = TimeSeries::new("x", points).unwrap();
//!
//! let var = VarCalculationEngine::new()
//!     .run(&[InstrumentConfig::new(series, 100.0)])
//!     .unwrap();
//! assert!((var + 2.6).abs() < 1e-9);
//! ```

#![warn(missing_docs)]

pub use histvar_config as config;
pub use histvar_core as core;
pub use histvar_ext_file as file;
pub use histvar_pricing as pricing;
pub use histvar_risk as risk;

/// Prelude for convenient imports.
pub mod prelude {
    pub use histvar_config::{InstrumentSpec, Validate, VarRunConfig};
    pub use histvar_core::prelude::*;
    pub use histvar_ext_file::{PriceFileOptions, PriceTable};
    pub use histvar_pricing::prelude::*;
    pub use histvar_risk::prelude::*;
}
