//! Per-instrument PnL vectors.

use histvar_core::{PnlVector, TimeSeries};

use crate::error::{RiskError, RiskResult};
use crate::returns::{DomainError, ReturnEstimator};

/// Builds the PnL vector of one instrument.
///
/// Each observation is paired with its chronological predecessor: the price
/// at `t - 1` is `time0` and the price at `t` is `time1`. The estimated
/// return is multiplied by `portfolio_value` and recorded against date `t`.
/// The oldest date has no predecessor and is dropped, so the result has
/// `series.len() - 1` scenarios (none for a series of fewer than two points).
///
/// # Errors
///
/// - `RiskError::InvalidInput` if `portfolio_value` is not finite
/// - `RiskError::Domain` on the first price pair the estimator rejects, or
///   whose PnL overflows; no pairs are skipped
pub fn build_pnl_vector(
    series: &TimeSeries,
    portfolio_value: f64,
    horizon_days: f64,
    estimator: &dyn ReturnEstimator,
) -> RiskResult<PnlVector> {
    build_labelled_pnl_vector(
        series.name(),
        series,
        portfolio_value,
        horizon_days,
        estimator,
    )
}

/// Like [`build_pnl_vector`], labelling the result (and any error) with
/// `label` instead of the series name.
pub fn build_labelled_pnl_vector(
    label: &str,
    series: &TimeSeries,
    portfolio_value: f64,
    horizon_days: f64,
    estimator: &dyn ReturnEstimator,
) -> RiskResult<PnlVector> {
    if !portfolio_value.is_finite() {
        return Err(RiskError::invalid_input(format!(
            "portfolio value for '{label}' must be finite, got {portfolio_value}"
        )));
    }

    let dates = series.dates();
    let prices = series.values();
    let scenarios = prices.len().saturating_sub(1);

    let mut pnl = Vec::with_capacity(scenarios);
    for (offset, pair) in prices.windows(2).enumerate() {
        let position = offset + 1;
        let domain_error = |source| RiskError::Domain {
            instrument: label.to_string(),
            date: dates[position],
            position,
            source,
        };

        let shift = estimator
            .estimate(pair[0], pair[1], horizon_days)
            .map_err(domain_error)?;
        if !shift.is_finite() {
            return Err(domain_error(DomainError::NonFiniteReturn(shift)));
        }

        let value = shift * portfolio_value;
        if !value.is_finite() {
            return Err(domain_error(DomainError::NonFinitePnl {
                shift,
                portfolio_value,
            }));
        }
        pnl.push(value);
    }

    Ok(PnlVector::new(
        label,
        dates.iter().skip(1).copied().collect(),
        pnl,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::returns::{AbsoluteShift, LogShift};
    use approx::assert_relative_eq;
    use histvar_core::Date;

    fn series(name: &str, prices: &[f64]) -> TimeSeries {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let points = prices
            .iter()
            .enumerate()
            .map(|(i, p)| (start + i as i64, *p))
            .collect();
        TimeSeries::new(name, points).unwrap()
    }

    #[test]
    fn test_pairs_each_date_with_predecessor() {
        let s = series("ccy-1", &[100.0, 101.0, 99.99]);
        let pnl = build_pnl_vector(&s, 1_000.0, 1.0, &LogShift).unwrap();

        assert_eq!(pnl.label(), "ccy-1");
        assert_eq!(pnl.dates(), &s.dates()[1..]);
        assert_relative_eq!(pnl.values()[0], 10.0, epsilon = 1e-9);
        assert_relative_eq!(pnl.values()[1], -10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_short_series_gives_empty_vector() {
        let s = series("x", &[100.0]);
        assert!(build_pnl_vector(&s, 1.0, 1.0, &LogShift).unwrap().is_empty());
        let empty = series("x", &[]);
        assert!(build_pnl_vector(&empty, 1.0, 1.0, &LogShift)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_negative_notional_flips_sign() {
        let s = series("x", &[10.0, 9.0, 9.5]);
        let long = build_pnl_vector(&s, 500.0, 1.0, &LogShift).unwrap();
        let short = build_pnl_vector(&s, -500.0, 1.0, &LogShift).unwrap();
        for (l, s) in long.values().iter().zip(short.values()) {
            assert_relative_eq!(*l, -*s);
        }
    }

    #[test]
    fn test_domain_error_reports_date_and_position() {
        let s = series("ccy-2", &[1.0, 1.1, 0.0, 1.2]);
        let err = build_pnl_vector(&s, 1.0, 1.0, &LogShift).unwrap_err();
        match err {
            RiskError::Domain {
                instrument,
                date,
                position,
                source,
            } => {
                assert_eq!(instrument, "ccy-2");
                assert_eq!(position, 2);
                assert_eq!(date, s.dates()[2]);
                assert!(matches!(
                    source,
                    DomainError::NonPositivePrice {
                        name: "time1_value",
                        ..
                    }
                ));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_notional_rejected() {
        let s = series("x", &[1.0, 2.0]);
        assert!(matches!(
            build_pnl_vector(&s, f64::NAN, 1.0, &LogShift),
            Err(RiskError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_non_finite_custom_return_rejected() {
        let s = series("x", &[1.0, 2.0]);
        let broken = |_: f64, _: f64, _: f64| Ok::<f64, DomainError>(f64::INFINITY);
        assert!(matches!(
            build_pnl_vector(&s, 1.0, 1.0, &broken),
            Err(RiskError::Domain {
                source: DomainError::NonFiniteReturn(_),
                ..
            })
        ));
    }

    #[test]
    fn test_overflowing_pnl_rejected() {
        let s = series("ccy-1", &[1.0, 3.0, 1.0]);
        let err = build_pnl_vector(&s, 1e308, 1.0, &LogShift).unwrap_err();
        match err {
            RiskError::Domain {
                instrument,
                position,
                source: DomainError::NonFinitePnl { portfolio_value, .. },
                ..
            } => {
                assert_eq!(instrument, "ccy-1");
                assert_eq!(position, 1);
                assert_eq!(portfolio_value, 1e308);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_label_overrides_series_name() {
        let s = series("raw", &[1.0, 2.0, 0.0]);
        let pnl = build_labelled_pnl_vector("desk", &s, 1.0, 1.0, &AbsoluteShift).unwrap();
        assert_eq!(pnl.label(), "desk");

        let err = build_labelled_pnl_vector("desk", &s, 1.0, 1.0, &LogShift).unwrap_err();
        assert!(matches!(err, RiskError::Domain { instrument, .. } if instrument == "desk"));
    }

    #[test]
    fn test_absolute_shift_pnl() {
        let s = series("rate", &[0.0125, 0.0150, 0.0100]);
        let pnl = build_pnl_vector(&s, 10_000.0, 1.0, &AbsoluteShift).unwrap();
        assert_relative_eq!(pnl.values()[0], 25.0, epsilon = 1e-9);
        assert_relative_eq!(pnl.values()[1], -50.0, epsilon = 1e-9);
    }
}
