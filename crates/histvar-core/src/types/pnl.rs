//! Profit-and-loss scenario vectors.

use serde::Serialize;

use super::Date;
use crate::error::{CoreError, CoreResult};

/// Per-date PnL scenarios, one per date of the source index.
///
/// The label names the instrument that produced the vector, or the
/// portfolio for aggregated vectors, and is carried into error messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PnlVector {
    label: String,
    dates: Vec<Date>,
    values: Vec<f64>,
}

impl PnlVector {
    /// Creates a PnL vector from parallel date and value vectors.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::LengthMismatch` if the vectors differ in length.
    pub fn new(label: impl Into<String>, dates: Vec<Date>, values: Vec<f64>) -> CoreResult<Self> {
        let label = label.into();
        if dates.len() != values.len() {
            return Err(CoreError::LengthMismatch {
                label,
                dates: dates.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            label,
            dates,
            values,
        })
    }

    /// Creates a vector of zeros over `index`.
    #[must_use]
    pub fn zeros(label: impl Into<String>, index: &[Date]) -> Self {
        Self {
            label: label.into(),
            dates: index.to_vec(),
            values: vec![0.0; index.len()],
        }
    }

    /// Creates an empty vector.
    #[must_use]
    pub fn empty(label: impl Into<String>) -> Self {
        Self::zeros(label, &[])
    }

    /// Returns the label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the date index.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the PnL values, aligned with [`PnlVector::dates`].
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of scenarios.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the vector holds no scenarios.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the scenario at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<(Date, f64)> {
        Some((*self.dates.get(index)?, *self.values.get(index)?))
    }

    /// Iterates over `(date, pnl)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }

    /// Returns true if `other` has exactly the same date index.
    #[must_use]
    pub fn shares_index_with(&self, other: &PnlVector) -> bool {
        self.dates == other.dates
    }

    /// Returns the first position at which `other`'s index differs from this one.
    #[must_use]
    pub fn first_index_difference(&self, other: &PnlVector) -> Option<usize> {
        let common = self.dates.len().min(other.dates.len());
        (0..common)
            .find(|&i| self.dates[i] != other.dates[i])
            .or_else(|| (self.dates.len() != other.dates.len()).then_some(common))
    }

    /// Sum of all scenarios.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn day(d: u32) -> Date {
        Date::from_ymd(2024, 3, d).unwrap()
    }

    #[test]
    fn test_new_checks_lengths() {
        assert!(PnlVector::new("x", vec![day(1)], vec![1.0, 2.0]).is_err());
        let v = PnlVector::new("x", vec![day(1), day(2)], vec![1.0, -2.5]).unwrap();
        assert_eq!(v.len(), 2);
        assert_relative_eq!(v.total(), -1.5);
    }

    #[test]
    fn test_zeros() {
        let v = PnlVector::zeros("portfolio", &[day(1), day(2), day(3)]);
        assert_eq!(v.values(), &[0.0, 0.0, 0.0]);
        assert_eq!(v.label(), "portfolio");
        assert!(PnlVector::empty("portfolio").is_empty());
    }

    #[test]
    fn test_index_difference() {
        let a = PnlVector::zeros("a", &[day(1), day(2), day(3)]);
        let b = PnlVector::zeros("b", &[day(1), day(4), day(3)]);
        let c = PnlVector::zeros("c", &[day(1), day(2)]);

        assert!(a.shares_index_with(&a.clone()));
        assert_eq!(a.first_index_difference(&b), Some(1));
        assert_eq!(a.first_index_difference(&c), Some(2));
        assert_eq!(a.first_index_difference(&a), None);
    }
}
