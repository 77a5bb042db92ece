//! Historical-simulation VaR.

use histvar_core::PnlVector;

use super::Scenario;
use crate::RiskError;

/// Weight on the 2nd worst scenario.
const SECOND_WORST_WEIGHT: f64 = 0.4;

/// Weight on the 3rd worst scenario.
const THIRD_WORST_WEIGHT: f64 = 0.6;

/// Minimum number of scenarios for the interpolation.
pub const MIN_SCENARIOS: usize = 3;

/// The two scenarios the 99% VaR interpolates between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TailScenarios {
    /// `0.4 * second_worst + 0.6 * third_worst`
    pub var: f64,
    /// Index 1 of the ascending sort.
    pub second_worst: Scenario,
    /// Index 2 of the ascending sort.
    pub third_worst: Scenario,
}

/// Calculate the 99% historical VaR of a set of PnL scenarios.
///
/// Scenarios are sorted ascending (worst loss first) and the result is
/// `0.4 * sorted[1] + 0.6 * sorted[2]`. On a 260-scenario window this
/// interpolates the 1st percentile. Other window lengths use the same two
/// indices, so the result is then only a nominal 99% figure.
///
/// The result does not depend on the order of `pnl`.
///
/// # Arguments
///
/// * `pnl` - Portfolio PnL per scenario (losses negative)
///
/// # Errors
///
/// Returns `RiskError::InsufficientData` for fewer than 3 scenarios.
pub fn historical_var_99(pnl: &[f64]) -> Result<f64, RiskError> {
    if pnl.len() < MIN_SCENARIOS {
        return Err(RiskError::insufficient_data(MIN_SCENARIOS, pnl.len()));
    }

    let mut sorted = pnl.to_vec();
    sorted.sort_by(f64::total_cmp);

    Ok(SECOND_WORST_WEIGHT * sorted[1] + THIRD_WORST_WEIGHT * sorted[2])
}

/// Calculate the 99% historical VaR of a PnL vector, keeping the dates of
/// the interpolated scenarios.
///
/// Equal PnLs keep their index order, so ties resolve to the earlier date.
///
/// # Errors
///
/// Returns `RiskError::InsufficientData` for fewer than 3 scenarios.
pub fn tail_scenarios_99(pnl: &PnlVector) -> Result<TailScenarios, RiskError> {
    if pnl.len() < MIN_SCENARIOS {
        return Err(RiskError::insufficient_data(MIN_SCENARIOS, pnl.len()));
    }

    let values = pnl.values();
    let mut ranked: Vec<usize> = (0..values.len()).collect();
    ranked.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let scenario = |rank: usize| {
        let index = ranked[rank];
        Scenario {
            date: pnl.dates()[index],
            pnl: values[index],
        }
    };
    let second_worst = scenario(1);
    let third_worst = scenario(2);

    Ok(TailScenarios {
        var: SECOND_WORST_WEIGHT * second_worst.pnl + THIRD_WORST_WEIGHT * third_worst.pnl,
        second_worst,
        third_worst,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use histvar_core::Date;

    #[test]
    fn test_three_scenarios() {
        let var = historical_var_99(&[-10.0, -5.0, -1.0]).unwrap();
        assert_relative_eq!(var, -2.6, epsilon = 1e-12);
    }

    #[test]
    fn test_unsorted_input() {
        let var = historical_var_99(&[-1.0, 4.0, -10.0, 7.5, -5.0]).unwrap();
        assert_relative_eq!(var, 0.4 * -5.0 + 0.6 * -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ties() {
        let var = historical_var_99(&[-3.0, -3.0, -3.0, 2.0]).unwrap();
        assert_relative_eq!(var, -3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_all_gains_give_positive_var() {
        let var = historical_var_99(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_relative_eq!(var, 0.4 * 2.0 + 0.6 * 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_insufficient_data() {
        assert!(matches!(
            historical_var_99(&[-1.0, 2.0]),
            Err(RiskError::InsufficientData {
                required: 3,
                actual: 2
            })
        ));
        assert!(historical_var_99(&[]).is_err());
    }

    #[test]
    fn test_tail_scenarios_carry_dates() {
        let start = Date::from_ymd(2024, 4, 1).unwrap();
        let dates = (0..5).map(|i| start + i).collect();
        let pnl = PnlVector::new("portfolio", dates, vec![3.0, -8.0, -2.0, -20.0, 0.5]).unwrap();

        let tail = tail_scenarios_99(&pnl).unwrap();
        assert_eq!(tail.second_worst.date, start + 1);
        assert_eq!(tail.third_worst.date, start + 2);
        assert_relative_eq!(tail.var, 0.4 * -8.0 + 0.6 * -2.0, epsilon = 1e-12);
        assert_relative_eq!(tail.var, historical_var_99(pnl.values()).unwrap());
    }

    #[test]
    fn test_tail_scenarios_tie_break_prefers_earlier_date() {
        let start = Date::from_ymd(2024, 4, 1).unwrap();
        let dates = (0..4).map(|i| start + i).collect();
        let pnl = PnlVector::new("portfolio", dates, vec![-1.0, -5.0, -1.0, -1.0]).unwrap();

        let tail = tail_scenarios_99(&pnl).unwrap();
        assert_eq!(tail.second_worst.date, start);
        assert_eq!(tail.third_worst.date, start + 2);
    }
}
