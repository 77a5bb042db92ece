//! End-to-end tests for the VaR calculation engine.
//!
//! These tests run complete portfolios through the engine and compare with
//! hand-computed results.

use std::sync::Arc;
use std::thread;

use approx::assert_abs_diff_eq;
use histvar_core::{Date, TimeSeries};
use histvar_risk::prelude::*;

// =============================================================================
// TEST FIXTURES
// =============================================================================

const CCY1_NOTIONAL: f64 = 153_084.81;
const CCY2_NOTIONAL: f64 = 95_891.51;
const ROWS: usize = 260;

fn start_date() -> Date {
    Date::from_ymd(2023, 1, 2).unwrap()
}

/// Builds prices from day-over-day move factors; `factors[0]` is ignored.
fn prices_from_factors(initial: f64, factors: &[f64]) -> Vec<f64> {
    let mut prices = Vec::with_capacity(factors.len());
    prices.push(initial);
    for factor in &factors[1..] {
        let last = *prices.last().unwrap();
        prices.push(last * factor);
    }
    prices
}

fn series(name: &str, prices: &[f64]) -> TimeSeries {
    let points = prices
        .iter()
        .enumerate()
        .map(|(i, p)| (start_date() + i as i64, *p))
        .collect();
    TimeSeries::new(name, points).unwrap()
}

/// ccy-1 alternates +1% / -1/1.01 moves, with shocks on days 57 and 143.
fn ccy1_factors() -> Vec<f64> {
    let mut factors: Vec<f64> = (0..ROWS)
        .map(|i| if i % 2 == 1 { 1.01 } else { 1.0 / 1.01 })
        .collect();
    factors[57] = 0.97;
    factors[58] = 1.0 / 0.97;
    factors[143] = 0.975;
    factors[144] = 1.0 / 0.975;
    factors
}

/// ccy-2 alternates in the opposite phase, with shocks on days 91 and 143.
fn ccy2_factors() -> Vec<f64> {
    let mut factors: Vec<f64> = (0..ROWS)
        .map(|i| if i % 2 == 1 { 1.0 / 1.005 } else { 1.005 })
        .collect();
    factors[91] = 0.96;
    factors[92] = 1.0 / 0.96;
    factors[143] = 0.99;
    factors[144] = 1.0 / 0.99;
    factors
}

fn reference_portfolio() -> Vec<InstrumentConfig> {
    vec![
        InstrumentConfig::new(
            series("ccy-1", &prices_from_factors(1.2345, &ccy1_factors())),
            CCY1_NOTIONAL,
        ),
        InstrumentConfig::new(
            series("ccy-2", &prices_from_factors(0.8765, &ccy2_factors())),
            CCY2_NOTIONAL,
        ),
    ]
}

// =============================================================================
// REFERENCE SCENARIO
// =============================================================================

#[test]
fn test_reference_scenario_matches_hand_computation() {
    // Worst days:
    //   day 57:  -3%    * N1 + (1/1.005 - 1) * N2 = -5069.62
    //   day 143: -2.5%  * N1 - 1%            * N2 = -4786.04
    //   day 91:  +1%    * N1 - 4%            * N2 = -2304.81
    let second_worst = -0.025 * CCY1_NOTIONAL - 0.01 * CCY2_NOTIONAL;
    let third_worst = 0.01 * CCY1_NOTIONAL - 0.04 * CCY2_NOTIONAL;
    let expected = 0.4 * second_worst + 0.6 * third_worst;
    assert_abs_diff_eq!(expected, -3297.30, epsilon = 0.005);

    let var = VarCalculationEngine::new()
        .run(&reference_portfolio())
        .unwrap();
    assert_abs_diff_eq!(var, expected, epsilon = 0.005);
}

#[test]
fn test_reference_scenario_report() {
    let report = VarCalculationEngine::new()
        .run_report(&reference_portfolio())
        .unwrap();

    assert_eq!(report.observations, ROWS - 1);
    assert_eq!(report.instruments, 2);
    assert_eq!(report.second_worst.date, start_date() + 143);
    assert_eq!(report.third_worst.date, start_date() + 91);
    assert_eq!(report.pnl.dates().first(), Some(&(start_date() + 1)));
    assert_abs_diff_eq!(report.var, -3297.30, epsilon = 0.005);
}

#[test]
fn test_descending_input_gives_same_var() {
    let ascending = reference_portfolio();
    let descending: Vec<InstrumentConfig> = ascending
        .iter()
        .map(|config| {
            let mut points: Vec<(Date, f64)> = config.series().iter().collect();
            points.reverse();
            let reversed = TimeSeries::new(config.name(), points).unwrap();
            InstrumentConfig::new(reversed, config.portfolio_value())
        })
        .collect();

    let engine = VarCalculationEngine::new();
    let a = engine.run(&ascending).unwrap();
    let b = engine.run(&descending).unwrap();
    assert_eq!(a, b);
}

// =============================================================================
// PROPERTIES ON FIXED DATA
// =============================================================================

#[test]
fn test_constant_prices_give_zero_var() {
    let flat = vec![1.5; ROWS];
    let configs = vec![
        InstrumentConfig::new(series("a", &flat), 1_000_000.0),
        InstrumentConfig::new(series("b", &flat), -250_000.0),
    ];
    assert_eq!(VarCalculationEngine::new().run(&configs).unwrap(), 0.0);
}

#[test]
fn test_instrument_order_does_not_matter() {
    let mut configs = reference_portfolio();
    let engine = VarCalculationEngine::new();
    let forward = engine.run(&configs).unwrap();
    configs.reverse();
    let backward = engine.run(&configs).unwrap();
    assert_abs_diff_eq!(forward, backward, epsilon = 1e-9);
}

#[test]
fn test_doubling_notional_doubles_var() {
    let prices = prices_from_factors(100.0, &ccy1_factors());
    let engine = VarCalculationEngine::new();
    let single = engine
        .run(&[InstrumentConfig::new(series("x", &prices), 10_000.0)])
        .unwrap();
    let double = engine
        .run(&[InstrumentConfig::new(series("x", &prices), 20_000.0)])
        .unwrap();
    assert!(single < 0.0);
    assert_abs_diff_eq!(double, 2.0 * single, epsilon = 1e-9);
}

#[test]
fn test_longer_horizon_widens_var() {
    let prices = prices_from_factors(100.0, &ccy1_factors());
    let engine = VarCalculationEngine::new();
    let one_day = engine
        .run(&[InstrumentConfig::new(series("x", &prices), 10_000.0)])
        .unwrap();
    let ten_day = engine
        .run(&[InstrumentConfig::new(series("x", &prices), 10_000.0).with_horizon_days(10.0)])
        .unwrap();
    assert!(ten_day < one_day);
}

#[test]
fn test_mismatched_calendars_rejected() {
    let prices = prices_from_factors(100.0, &ccy1_factors());
    let shifted_points = prices
        .iter()
        .enumerate()
        .map(|(i, p)| (start_date() + i as i64 + 1, *p))
        .collect();
    let configs = vec![
        InstrumentConfig::new(series("a", &prices), 1.0),
        InstrumentConfig::new(TimeSeries::new("b", shifted_points).unwrap(), 1.0),
    ];
    assert!(matches!(
        VarCalculationEngine::new().run(&configs),
        Err(RiskError::IndexMismatch { position: 0, .. })
    ));
}

#[test]
fn test_overflowing_positions_fail_instead_of_nan() {
    let prices = [1.0, 3.0, 1.0, 3.0, 1.0];
    let configs = vec![
        InstrumentConfig::new(series("long", &prices), 1e308).with_name("long leg"),
        InstrumentConfig::new(series("short", &prices), -1e308),
    ];
    match VarCalculationEngine::new().run(&configs) {
        Err(RiskError::Domain {
            instrument,
            position,
            source: DomainError::NonFinitePnl { .. },
            ..
        }) => {
            assert_eq!(instrument, "long leg");
            assert_eq!(position, 1);
        }
        other => panic!("expected overflow to be rejected, got {other:?}"),
    }
}

#[test]
fn test_mixed_estimators() {
    let rates: Vec<f64> = (0..ROWS)
        .map(|i| 0.02 + if i % 3 == 0 { 0.0005 } else { -0.0002 })
        .collect();
    let configs = vec![
        reference_portfolio().remove(0),
        InstrumentConfig::new(series("rate", &rates), -1_000_000.0)
            .with_shared_estimator(EstimatorKind::AbsoluteShift.estimator()),
    ];
    let var = VarCalculationEngine::new().run(&configs).unwrap();
    assert!(var.is_finite());
}

// =============================================================================
// CONCURRENCY
// =============================================================================

#[test]
fn test_concurrent_runs_are_independent() {
    let engine = VarCalculationEngine::new();
    let configs = Arc::new(reference_portfolio());
    let expected = engine.run(&configs).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let configs = Arc::clone(&configs);
            thread::spawn(move || engine.run(&configs).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
