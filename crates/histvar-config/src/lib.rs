//! HistVaR Configuration Layer
//!
//! Describes a VaR run in a TOML or JSON file: which price file to read, how
//! to parse it, and which positions to hold.
//!
//! # Example
//!
//! ```rust
//! use histvar_config::{Validate, VarRunConfig};
//!
//! let config = VarRunConfig::from_toml_str(r#"
//!     name = "fx-book"
//!     price_file = "prices.tsv"
//!
//!     [[instruments]]
//!     column = "ccy-1"
//!     notional = 153084.81
//!
//!     [[instruments]]
//!     column = "ccy-2"
//!     notional = 95891.51
//!     estimator = "simple_shift"
//! "#).unwrap();
//!
//! assert!(config.is_valid());
//! assert_eq!(config.instruments.len(), 2);
//! assert_eq!(config.delimiter, '\t');
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod run;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use run::{InstrumentSpec, VarRunConfig};
