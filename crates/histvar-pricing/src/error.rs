//! Error types for option pricing.

use thiserror::Error;

/// Result type for pricing operations.
pub type PricingResult<T> = Result<T, PricingError>;

/// Errors that can occur during option pricing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// Strike, forward or volatility outside the model's domain.
    #[error(
        "invalid price parameters: forward={forward}, strike={strike}, volatility={volatility}"
    )]
    InvalidPriceParameters {
        /// Forward price.
        forward: f64,
        /// Strike price.
        strike: f64,
        /// Annualised volatility.
        volatility: f64,
    },

    /// Unrecognised option type name.
    #[error("unknown option type '{0}', expected 'call' or 'put'")]
    UnknownOptionType(String),
}

impl PricingError {
    /// Creates a new invalid price parameters error.
    #[must_use]
    pub fn invalid_price_parameters(forward: f64, strike: f64, volatility: f64) -> Self {
        Self::InvalidPriceParameters {
            forward,
            strike,
            volatility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PricingError::invalid_price_parameters(19.0, -1.0, 0.3);
        assert_eq!(
            err.to_string(),
            "invalid price parameters: forward=19, strike=-1, volatility=0.3"
        );

        let err = PricingError::UnknownOptionType("straddle".into());
        assert!(err.to_string().contains("straddle"));
    }
}
