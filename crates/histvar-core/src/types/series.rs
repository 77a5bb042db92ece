//! Instrument price time series.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::Date;
use crate::error::{CoreError, CoreResult};

/// Date order in which a series' points were supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesOrder {
    /// Oldest observation first.
    Ascending,
    /// Newest observation first (the layout of most end-of-day rate files).
    Descending,
}

/// The price history of one instrument.
///
/// Points are always held oldest-first, whatever order they were supplied
/// in, so that position `i - 1` is the chronological predecessor of
/// position `i`. Dates are unique.
///
/// Prices are not validated here; the return estimator applied to the series
/// decides which values are in its domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    name: String,
    dates: Vec<Date>,
    values: Vec<f64>,
    order: SeriesOrder,
}

impl TimeSeries {
    /// Creates a series from `(date, price)` points.
    ///
    /// The points must be strictly monotonic in date, either ascending or
    /// descending. Descending input is reversed into ascending order.
    ///
    /// # Errors
    ///
    /// - `CoreError::DuplicateDate` if two adjacent points share a date
    /// - `CoreError::UnorderedSeries` if the dates change direction
    pub fn new(name: impl Into<String>, points: Vec<(Date, f64)>) -> CoreResult<Self> {
        let name = name.into();
        let order = detect_order(&name, &points)?;

        let (mut dates, mut values): (Vec<Date>, Vec<f64>) = points.into_iter().unzip();
        if order == SeriesOrder::Descending {
            dates.reverse();
            values.reverse();
        }

        Ok(Self {
            name,
            dates,
            values,
            order,
        })
    }

    /// Creates a series from parallel date and price vectors.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::LengthMismatch` if the vectors differ in length,
    /// otherwise the same errors as [`TimeSeries::new`].
    pub fn from_parts(
        name: impl Into<String>,
        dates: Vec<Date>,
        values: Vec<f64>,
    ) -> CoreResult<Self> {
        let name = name.into();
        if dates.len() != values.len() {
            return Err(CoreError::LengthMismatch {
                label: name,
                dates: dates.len(),
                values: values.len(),
            });
        }
        Self::new(name, dates.into_iter().zip(values).collect())
    }

    /// Returns the instrument name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the order the points were originally supplied in.
    #[must_use]
    pub fn order(&self) -> SeriesOrder {
        self.order
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the series holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the dates, oldest first.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the prices, oldest first.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the oldest date.
    #[must_use]
    pub fn first_date(&self) -> Option<Date> {
        self.dates.first().copied()
    }

    /// Returns the most recent date.
    #[must_use]
    pub fn last_date(&self) -> Option<Date> {
        self.dates.last().copied()
    }

    /// Returns the observation at `index` (oldest first).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<(Date, f64)> {
        Some((*self.dates.get(index)?, *self.values.get(index)?))
    }

    /// Looks up the price observed on `date`.
    #[must_use]
    pub fn value_on(&self, date: Date) -> Option<f64> {
        self.dates
            .binary_search(&date)
            .ok()
            .map(|index| self.values[index])
    }

    /// Iterates over `(date, price)` pairs, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }
}

fn detect_order(name: &str, points: &[(Date, f64)]) -> CoreResult<SeriesOrder> {
    let mut order: Option<SeriesOrder> = None;

    for (position, pair) in points.windows(2).enumerate() {
        let (previous, current) = (pair[0].0, pair[1].0);
        let step = match current.cmp(&previous) {
            Ordering::Greater => SeriesOrder::Ascending,
            Ordering::Less => SeriesOrder::Descending,
            Ordering::Equal => {
                return Err(CoreError::DuplicateDate {
                    series: name.to_string(),
                    date: current.to_string(),
                    position: position + 1,
                });
            }
        };

        match order {
            None => order = Some(step),
            Some(expected) if expected != step => {
                return Err(CoreError::UnorderedSeries {
                    series: name.to_string(),
                    date: current.to_string(),
                    position: position + 1,
                });
            }
            Some(_) => {}
        }
    }

    Ok(order.unwrap_or(SeriesOrder::Ascending))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> Date {
        Date::from_ymd(2024, 1, d).unwrap()
    }

    #[test]
    fn test_ascending_input_is_kept() {
        let series =
            TimeSeries::new("ccy-1", vec![(day(1), 1.0), (day(2), 2.0), (day(3), 3.0)]).unwrap();
        assert_eq!(series.order(), SeriesOrder::Ascending);
        assert_eq!(series.dates(), &[day(1), day(2), day(3)]);
        assert_eq!(series.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_descending_input_is_reversed() {
        let series =
            TimeSeries::new("ccy-1", vec![(day(3), 3.0), (day(2), 2.0), (day(1), 1.0)]).unwrap();
        assert_eq!(series.order(), SeriesOrder::Descending);
        assert_eq!(series.first_date(), Some(day(1)));
        assert_eq!(series.last_date(), Some(day(3)));
        assert_eq!(series.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_duplicate_date_rejected() {
        let err = TimeSeries::new("ccy-1", vec![(day(1), 1.0), (day(2), 2.0), (day(2), 2.5)])
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateDate { position: 2, .. }));
    }

    #[test]
    fn test_direction_change_rejected() {
        let err = TimeSeries::new(
            "ccy-2",
            vec![(day(1), 1.0), (day(3), 2.0), (day(2), 3.0), (day(4), 4.0)],
        )
        .unwrap_err();
        match err {
            CoreError::UnorderedSeries {
                series, position, ..
            } => {
                assert_eq!(series, "ccy-2");
                assert_eq!(position, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_short_series() {
        let empty = TimeSeries::new("x", Vec::new()).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.first_date(), None);

        let single = TimeSeries::new("x", vec![(day(5), 1.5)]).unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single.order(), SeriesOrder::Ascending);
    }

    #[test]
    fn test_from_parts_length_mismatch() {
        let err = TimeSeries::from_parts("x", vec![day(1), day(2)], vec![1.0]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::LengthMismatch {
                dates: 2,
                values: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_value_lookup() {
        let series =
            TimeSeries::new("x", vec![(day(4), 4.0), (day(2), 2.0), (day(1), 1.0)]).unwrap();
        assert_eq!(series.value_on(day(2)), Some(2.0));
        assert_eq!(series.value_on(day(3)), None);
        assert_eq!(series.get(2), Some((day(4), 4.0)));
        assert_eq!(series.iter().count(), 3);
    }
}
