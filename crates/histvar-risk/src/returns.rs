//! Return estimators.
//!
//! A return estimator maps two chronologically adjacent prices and a risk
//! horizon (in days) to a return fraction over that horizon. The PnL builder
//! accepts any [`ReturnEstimator`].
//!
//! The shipped estimators scale the observed one-day move to an N-day move
//! with the square root of time. That scaling is exact only if daily log
//! returns are i.i.d. normal; it is used here as an approximation.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input rejected by a return estimator.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// A price that must be strictly positive and finite was not.
    #[error("{name} must be a positive finite price, got {value}")]
    NonPositivePrice {
        /// Which argument was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A value that must be finite was NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// Which argument was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The horizon was negative or not finite.
    #[error("horizon must be a finite number of days >= 0, got {0}")]
    InvalidHorizon(f64),

    /// The estimator produced a NaN or infinite return.
    #[error("estimated return is not finite: {0}")]
    NonFiniteReturn(f64),

    /// A finite return scaled by the position value overflowed.
    #[error("PnL of return {shift} on position {portfolio_value} is not finite")]
    NonFinitePnl {
        /// The estimated return.
        shift: f64,
        /// The position value it was applied to.
        portfolio_value: f64,
    },
}

/// Estimates a return over a horizon from two adjacent observations.
///
/// `time0_value` is the earlier observation and `time1_value` the later one.
/// Implementations must be pure: the same inputs always give the same output.
///
/// Any `Fn(f64, f64, f64) -> Result<f64, DomainError>` is an estimator:
///
/// ```rust
/// use histvar_risk::returns::{DomainError, ReturnEstimator};
///
/// let unscaled = |t0: f64, t1: f64, _horizon: f64| -> Result<f64, DomainError> {
///     Ok(t1 / t0 - 1.0)
/// };
/// assert!((unscaled.estimate(100.0, 102.0, 10.0).unwrap() - 0.02).abs() < 1e-12);
/// ```
pub trait ReturnEstimator: Send + Sync {
    /// Returns the estimated return fraction over `horizon_days`.
    fn estimate(
        &self,
        time0_value: f64,
        time1_value: f64,
        horizon_days: f64,
    ) -> Result<f64, DomainError>;

    /// Short name used in diagnostics.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> ReturnEstimator for F
where
    F: Fn(f64, f64, f64) -> Result<f64, DomainError> + Send + Sync,
{
    fn estimate(
        &self,
        time0_value: f64,
        time1_value: f64,
        horizon_days: f64,
    ) -> Result<f64, DomainError> {
        self(time0_value, time1_value, horizon_days)
    }
}

fn check_price(name: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::NonPositivePrice { name, value })
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite { name, value })
    }
}

fn check_horizon(horizon_days: f64) -> Result<f64, DomainError> {
    if horizon_days.is_finite() && horizon_days >= 0.0 {
        Ok(horizon_days)
    } else {
        Err(DomainError::InvalidHorizon(horizon_days))
    }
}

/// Log return scaled by √horizon, converted back to a simple return.
///
/// `exp(ln(time1 / time0) * sqrt(horizon)) - 1`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogShift;

impl ReturnEstimator for LogShift {
    fn estimate(
        &self,
        time0_value: f64,
        time1_value: f64,
        horizon_days: f64,
    ) -> Result<f64, DomainError> {
        let t0 = check_price("time0_value", time0_value)?;
        let t1 = check_price("time1_value", time1_value)?;
        let horizon = check_horizon(horizon_days)?;

        Ok(((t1 / t0).ln() * horizon.sqrt()).exp_m1())
    }

    fn name(&self) -> &str {
        "log_shift"
    }
}

/// Simple percentage change scaled by √horizon.
///
/// `(time1 / time0 - 1) * sqrt(horizon)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleShift;

impl ReturnEstimator for SimpleShift {
    fn estimate(
        &self,
        time0_value: f64,
        time1_value: f64,
        horizon_days: f64,
    ) -> Result<f64, DomainError> {
        let t0 = check_price("time0_value", time0_value)?;
        let t1 = check_price("time1_value", time1_value)?;
        let horizon = check_horizon(horizon_days)?;

        Ok((t1 / t0 - 1.0) * horizon.sqrt())
    }

    fn name(&self) -> &str {
        "simple_shift"
    }
}

/// Absolute change scaled by √horizon.
///
/// `(time1 - time0) * sqrt(horizon)`. Suited to instruments quoted in
/// absolute units (rates, spreads) where the configured notional is a
/// sensitivity per unit move. Prices may be zero or negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbsoluteShift;

impl ReturnEstimator for AbsoluteShift {
    fn estimate(
        &self,
        time0_value: f64,
        time1_value: f64,
        horizon_days: f64,
    ) -> Result<f64, DomainError> {
        let t0 = check_finite("time0_value", time0_value)?;
        let t1 = check_finite("time1_value", time1_value)?;
        let horizon = check_horizon(horizon_days)?;

        Ok((t1 - t0) * horizon.sqrt())
    }

    fn name(&self) -> &str {
        "absolute_shift"
    }
}

/// Serializable selector for the built-in estimators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimatorKind {
    /// [`LogShift`]
    #[default]
    LogShift,
    /// [`SimpleShift`]
    SimpleShift,
    /// [`AbsoluteShift`]
    AbsoluteShift,
}

impl EstimatorKind {
    /// All built-in estimators.
    pub const ALL: [EstimatorKind; 3] = [
        EstimatorKind::LogShift,
        EstimatorKind::SimpleShift,
        EstimatorKind::AbsoluteShift,
    ];

    /// Returns a shareable instance of the selected estimator.
    #[must_use]
    pub fn estimator(self) -> Arc<dyn ReturnEstimator> {
        match self {
            Self::LogShift => Arc::new(LogShift),
            Self::SimpleShift => Arc::new(SimpleShift),
            Self::AbsoluteShift => Arc::new(AbsoluteShift),
        }
    }

    /// Returns the identifier used in configuration files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LogShift => "log_shift",
            Self::SimpleShift => "simple_shift",
            Self::AbsoluteShift => "absolute_shift",
        }
    }
}

impl fmt::Display for EstimatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EstimatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| {
                format!("unknown estimator '{s}' (expected log_shift, simple_shift or absolute_shift)")
            })
    }
}
