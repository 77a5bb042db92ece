//! Option pricing for the HistVaR library.
//!
//! Prices European options on a forward with the Black-76 formula:
//!
//! ```text
//! call = DF * (F * N(d1) - K * N(d2))
//! put  = DF * (K * N(-d2) - F * N(-d1))
//! ```
//!
//! where `DF = exp(-r * T)`, `d1 = (ln(F/K) + σ²T/2) / (σ√T)` and
//! `d2 = d1 - σ√T`.
//!
//! # Example
//!
//! ```rust
//! use histvar_pricing::{black_scholes_price, CallPut};
//!
//! let call = black_scholes_price(19.04367, 17.0, 0.46, 0.3, 0.005, CallPut::Call).unwrap();
//! assert!((call - 2.70).abs() < 0.005);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

pub mod black;
pub mod error;

pub use black::{black_scholes_price, CallPut};
pub use error::{PricingError, PricingResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use super::black::{black_scholes_price, CallPut};
    pub use super::error::{PricingError, PricingResult};
}
