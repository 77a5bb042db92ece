//! Portfolio aggregation of instrument PnL vectors.

use histvar_core::{Date, PnlVector};

use crate::error::{RiskError, RiskResult};

/// Label given to aggregated vectors.
pub const PORTFOLIO_LABEL: &str = "portfolio";

/// Sums instrument PnL vectors date by date.
///
/// Every vector must carry exactly the same ordered date index as the first
/// one. Indices are never realigned: a gap in one instrument's history is an
/// upstream data problem and is reported as such.
///
/// An empty input yields an empty vector.
///
/// # Errors
///
/// Returns `RiskError::IndexMismatch` naming the first vector whose index
/// differs from the first vector's.
pub fn aggregate_pnl(vectors: &[PnlVector]) -> RiskResult<PnlVector> {
    aggregate_pnl_over(vectors, &[])
}

/// Like [`aggregate_pnl`], but an empty input yields zeros over `default_index`.
pub fn aggregate_pnl_over(vectors: &[PnlVector], default_index: &[Date]) -> RiskResult<PnlVector> {
    let Some((reference, rest)) = vectors.split_first() else {
        return Ok(PnlVector::zeros(PORTFOLIO_LABEL, default_index));
    };

    let mut totals = reference.values().to_vec();
    for vector in rest {
        if let Some(position) = reference.first_index_difference(vector) {
            return Err(RiskError::IndexMismatch {
                label: vector.label().to_string(),
                reference: reference.label().to_string(),
                expected_len: reference.len(),
                actual_len: vector.len(),
                position,
            });
        }

        for (total, pnl) in totals.iter_mut().zip(vector.values()) {
            *total += pnl;
        }
    }

    Ok(PnlVector::new(
        PORTFOLIO_LABEL,
        reference.dates().to_vec(),
        totals,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn day(d: u32) -> Date {
        Date::from_ymd(2024, 2, d).unwrap()
    }

    fn vector(label: &str, days: &[u32], values: &[f64]) -> PnlVector {
        PnlVector::new(label, days.iter().map(|d| day(*d)).collect(), values.to_vec()).unwrap()
    }

    #[test]
    fn test_sums_position_by_position() {
        let a = vector("a", &[1, 2, 3], &[1.0, -2.0, 3.0]);
        let b = vector("b", &[1, 2, 3], &[0.5, 0.5, -4.0]);
        let total = aggregate_pnl(&[a, b]).unwrap();

        assert_eq!(total.label(), PORTFOLIO_LABEL);
        assert_eq!(total.dates(), &[day(1), day(2), day(3)]);
        assert_relative_eq!(total.values()[0], 1.5);
        assert_relative_eq!(total.values()[1], -1.5);
        assert_relative_eq!(total.values()[2], -1.0);
    }

    #[test]
    fn test_single_vector_is_relabelled_copy() {
        let a = vector("a", &[1, 2], &[1.0, 2.0]);
        let total = aggregate_pnl(std::slice::from_ref(&a)).unwrap();
        assert_eq!(total.values(), a.values());
        assert_eq!(total.label(), PORTFOLIO_LABEL);
    }

    #[test]
    fn test_mismatched_dates_rejected() {
        let a = vector("ccy-1", &[1, 2, 3], &[1.0, 2.0, 3.0]);
        let b = vector("ccy-2", &[1, 4, 3], &[1.0, 2.0, 3.0]);
        match aggregate_pnl(&[a, b]).unwrap_err() {
            RiskError::IndexMismatch {
                label,
                reference,
                position,
                ..
            } => {
                assert_eq!(label, "ccy-2");
                assert_eq!(reference, "ccy-1");
                assert_eq!(position, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let a = vector("a", &[1, 2, 3], &[1.0, 2.0, 3.0]);
        let b = vector("b", &[1, 2], &[1.0, 2.0]);
        assert!(matches!(
            aggregate_pnl(&[a, b]),
            Err(RiskError::IndexMismatch {
                expected_len: 3,
                actual_len: 2,
                position: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_pnl(&[]).unwrap().is_empty());

        let zeros = aggregate_pnl_over(&[], &[day(1), day(2)]).unwrap();
        assert_eq!(zeros.values(), &[0.0, 0.0]);
        assert_eq!(zeros.dates(), &[day(1), day(2)]);
    }
}
