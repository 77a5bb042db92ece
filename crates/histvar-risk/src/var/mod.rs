//! Value at Risk (VaR) calculations.
//!
//! VaR estimates the loss level that portfolio PnL is not expected to fall
//! below, at a given confidence level, over the risk horizon. Results keep
//! the PnL sign convention: a loss is a negative number.

mod historical;

pub use historical::*;

use std::fmt;

use histvar_core::{Date, PnlVector};
use serde::Serialize;

/// Confidence level of [`historical_var_99`].
pub const CONFIDENCE_LEVEL_99: f64 = 0.99;

/// Number of scenarios for which the 99% interpolation rule is calibrated.
pub const REFERENCE_WINDOW: usize = 260;

/// One dated PnL scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scenario {
    /// Scenario date.
    pub date: Date,
    /// Portfolio PnL on that date.
    pub pnl: f64,
}

/// Detailed result of a VaR run.
#[derive(Debug, Clone, Serialize)]
pub struct VarReport {
    /// The VaR value (negative denotes a loss)
    pub var: f64,
    /// Confidence level (0.99)
    pub confidence_level: f64,
    /// Number of PnL scenarios
    pub observations: usize,
    /// Number of instruments aggregated
    pub instruments: usize,
    /// The 2nd worst scenario
    pub second_worst: Scenario,
    /// The 3rd worst scenario
    pub third_worst: Scenario,
    /// Aggregated portfolio PnL vector
    #[serde(skip)]
    pub pnl: PnlVector,
}

impl VarReport {
    /// True when the scenario count matches the window the 99% rule assumes.
    #[must_use]
    pub fn is_reference_window(&self) -> bool {
        self.observations == REFERENCE_WINDOW
    }
}

impl fmt::Display for VarReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VaR({:.0}%, {} scenarios): {:.2}",
            self.confidence_level * 100.0,
            self.observations,
            self.var
        )
    }
}
