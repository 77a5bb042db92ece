//! Black-76 pricing of European options on a forward.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use statrs::function::erf::erfc;

use crate::error::{PricingError, PricingResult};

/// Option type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallPut {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl CallPut {
    /// Payoff at expiry for a given underlying level.
    #[must_use]
    pub fn intrinsic(self, forward: f64, strike: f64) -> f64 {
        match self {
            CallPut::Call => (forward - strike).max(0.0),
            CallPut::Put => (strike - forward).max(0.0),
        }
    }
}

impl fmt::Display for CallPut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallPut::Call => write!(f, "call"),
            CallPut::Put => write!(f, "put"),
        }
    }
}

impl FromStr for CallPut {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(CallPut::Call),
            "put" | "p" => Ok(CallPut::Put),
            _ => Err(PricingError::UnknownOptionType(s.to_string())),
        }
    }
}

/// Standard normal cumulative distribution.
fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Prices a European option on a forward.
///
/// Degenerate inputs are handled before the model is applied, in this order:
///
/// 1. `strike == 0`: a put is worth 0 and a call is worth the forward.
/// 2. `time_to_expiry <= 0`: the option pays its intrinsic value.
/// 3. `strike < 0`, `forward <= 0` or `volatility <= 0` are rejected.
///
/// Degenerate results are not discounted.
///
/// # Arguments
///
/// * `forward` - Forward price of the underlying
/// * `strike` - Strike price
/// * `time_to_expiry` - Time to expiry in years
/// * `volatility` - Annualised volatility (0.3 = 30%)
/// * `interest_rate` - Continuously compounded discount rate
/// * `call_put` - Option type
///
/// # Errors
///
/// Returns `PricingError::InvalidPriceParameters` when the inputs fall
/// outside the model's domain.
pub fn black_scholes_price(
    forward: f64,
    strike: f64,
    time_to_expiry: f64,
    volatility: f64,
    interest_rate: f64,
    call_put: CallPut,
) -> PricingResult<f64> {
    if strike == 0.0 {
        return Ok(match call_put {
            CallPut::Put => 0.0,
            CallPut::Call => forward,
        });
    }

    if time_to_expiry <= 0.0 {
        return Ok(call_put.intrinsic(forward, strike));
    }

    // Negated comparisons also reject NaN.
    if !(strike > 0.0 && forward > 0.0 && volatility > 0.0) {
        return Err(PricingError::invalid_price_parameters(
            forward, strike, volatility,
        ));
    }

    Ok(black_76(
        forward,
        strike,
        time_to_expiry,
        volatility,
        interest_rate,
        call_put,
    ))
}

fn black_76(
    forward: f64,
    strike: f64,
    time_to_expiry: f64,
    volatility: f64,
    interest_rate: f64,
    call_put: CallPut,
) -> f64 {
    let vol_sqrt_t = volatility * time_to_expiry.sqrt();
    let d1 = ((forward / strike).ln() + 0.5 * volatility * volatility * time_to_expiry) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    let df = (-interest_rate * time_to_expiry).exp();

    match call_put {
        CallPut::Call => df * (forward * norm_cdf(d1) - strike * norm_cdf(d2)),
        CallPut::Put => df * (strike * norm_cdf(-d2) - forward * norm_cdf(-d1)),
    }
}
