//! VaR calculation engine.
//!
//! Orchestrates one VaR run: builds every instrument's PnL vector, sums them
//! into the portfolio vector and reads the 99% VaR off the result.

use std::fmt;
use std::sync::Arc;

use histvar_core::TimeSeries;
use tracing::{debug, info};

use crate::aggregate::aggregate_pnl;
use crate::error::{RiskError, RiskResult};
use crate::pnl::build_labelled_pnl_vector;
use crate::returns::{LogShift, ReturnEstimator};
use crate::var::{tail_scenarios_99, VarReport, CONFIDENCE_LEVEL_99, REFERENCE_WINDOW};

/// Default risk horizon in days.
pub const DEFAULT_HORIZON_DAYS: f64 = 1.0;

/// One instrument position in a VaR run.
///
/// Defaults to a one-day horizon and the [`LogShift`] estimator.
#[derive(Clone)]
pub struct InstrumentConfig {
    name: String,
    series: TimeSeries,
    horizon_days: f64,
    portfolio_value: f64,
    estimator: Arc<dyn ReturnEstimator>,
}

impl InstrumentConfig {
    /// Creates a configuration named after the series.
    #[must_use]
    pub fn new(series: TimeSeries, portfolio_value: f64) -> Self {
        Self {
            name: series.name().to_string(),
            series,
            horizon_days: DEFAULT_HORIZON_DAYS,
            portfolio_value,
            estimator: Arc::new(LogShift),
        }
    }

    /// Sets the name used in logs and errors.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the risk horizon in days.
    #[must_use]
    pub fn with_horizon_days(mut self, horizon_days: f64) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    /// Sets the return estimator.
    #[must_use]
    pub fn with_estimator(mut self, estimator: impl ReturnEstimator + 'static) -> Self {
        self.estimator = Arc::new(estimator);
        self
    }

    /// Sets a shared return estimator.
    #[must_use]
    pub fn with_shared_estimator(mut self, estimator: Arc<dyn ReturnEstimator>) -> Self {
        self.estimator = estimator;
        self
    }

    /// Instrument name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price history.
    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    /// Risk horizon in days.
    pub fn horizon_days(&self) -> f64 {
        self.horizon_days
    }

    /// Position notional (signed).
    pub fn portfolio_value(&self) -> f64 {
        self.portfolio_value
    }

    /// Return estimator.
    pub fn estimator(&self) -> &dyn ReturnEstimator {
        self.estimator.as_ref()
    }
}

impl fmt::Debug for InstrumentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstrumentConfig")
            .field("name", &self.name)
            .field("observations", &self.series.len())
            .field("horizon_days", &self.horizon_days)
            .field("portfolio_value", &self.portfolio_value)
            .field("estimator", &self.estimator.name())
            .finish()
    }
}

/// Runs historical-simulation VaR over a portfolio.
///
/// The engine holds no state, so one instance can serve concurrent runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct VarCalculationEngine;

impl VarCalculationEngine {
    /// Creates an engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the portfolio's 99% VaR (negative denotes a loss).
    ///
    /// # Errors
    ///
    /// - `RiskError::EmptyPortfolio` if `configs` is empty
    /// - `RiskError::Domain` if any instrument's prices are rejected
    /// - `RiskError::IndexMismatch` if instrument date indices differ
    /// - `RiskError::InsufficientData` for fewer than 3 scenarios
    pub fn run(&self, configs: &[InstrumentConfig]) -> RiskResult<f64> {
        self.run_report(configs).map(|report| report.var)
    }

    /// Like [`VarCalculationEngine::run`], returning the detailed report.
    pub fn run_report(&self, configs: &[InstrumentConfig]) -> RiskResult<VarReport> {
        if configs.is_empty() {
            return Err(RiskError::EmptyPortfolio);
        }

        info!(
            "Received calculation config containing {} instruments",
            configs.len()
        );

        let vectors = configs
            .iter()
            .map(|config| {
                debug!(
                    "Calculating return PnLs for {} using N={}, portfolio_value={}, return_function={}",
                    config.name(),
                    config.horizon_days(),
                    config.portfolio_value(),
                    config.estimator().name()
                );
                build_labelled_pnl_vector(
                    config.name(),
                    config.series(),
                    config.portfolio_value(),
                    config.horizon_days(),
                    config.estimator(),
                )
            })
            .collect::<RiskResult<Vec<_>>>()?;

        let pnl = aggregate_pnl(&vectors)?;
        let tail = tail_scenarios_99(&pnl)?;

        if pnl.len() != REFERENCE_WINDOW {
            debug!(
                "Portfolio has {} scenarios; the 99% interpolation is calibrated for {}",
                pnl.len(),
                REFERENCE_WINDOW
            );
        }

        info!(
            "Portfolio VaR {:.2} over {} scenarios ({} on {}, {} on {})",
            tail.var,
            pnl.len(),
            tail.second_worst.pnl,
            tail.second_worst.date,
            tail.third_worst.pnl,
            tail.third_worst.date
        );

        Ok(VarReport {
            var: tail.var,
            confidence_level: CONFIDENCE_LEVEL_99,
            observations: pnl.len(),
            instruments: configs.len(),
            second_worst: tail.second_worst,
            third_worst: tail.third_worst,
            pnl,
        })
    }
}
