//! Delimited price files.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use histvar_core::{Date, TimeSeries};
use tracing::debug;

use crate::error::{FileError, FileResult};

/// Name of the mandatory first column.
pub const DATE_COLUMN: &str = "date";

/// Default date format (`31/12/2024`).
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

// =============================================================================
// OPTIONS
// =============================================================================

/// How to read a price file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFileOptions {
    /// Field delimiter (default tab).
    pub delimiter: u8,
    /// `chrono` format of the date column.
    pub date_format: String,
}

impl Default for PriceFileOptions {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl PriceFileOptions {
    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the date format.
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }
}

// =============================================================================
// PRICE TABLE
// =============================================================================

/// Prices of several instruments on a shared set of dates, in file row order.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    dates: Vec<Date>,
    columns: Vec<String>,
    // One vector per column, parallel to `dates`.
    prices: Vec<Vec<f64>>,
}

impl PriceTable {
    /// Loads a price file from disk.
    pub fn from_path(path: impl AsRef<Path>, options: &PriceFileOptions) -> FileResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| FileError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_reader(file, options)?;
        debug!(
            "Loaded {} rows for {} instruments from {}",
            table.len(),
            table.columns.len(),
            path.display()
        );
        Ok(table)
    }

    /// Reads a price table from any byte source.
    pub fn from_reader<R: Read>(reader: R, options: &PriceFileOptions) -> FileResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let mut fields = headers.iter();
        match fields.next() {
            Some(first) if first.eq_ignore_ascii_case(DATE_COLUMN) => {}
            other => {
                return Err(FileError::MissingDateColumn {
                    found: other.unwrap_or_default().to_string(),
                })
            }
        }

        let columns: Vec<String> = fields.map(str::to_string).collect();
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(FileError::DuplicateColumn(column.clone()));
            }
        }

        let mut dates = Vec::new();
        let mut prices = vec![Vec::new(); columns.len()];

        for record in reader.records() {
            let record = record?;
            let line = record.position().map_or(0, csv::Position::line);

            let raw_date = record.get(0).unwrap_or_default();
            let date = Date::parse_with_format(raw_date, &options.date_format).map_err(|_| {
                FileError::InvalidDate {
                    line,
                    value: raw_date.to_string(),
                    format: options.date_format.clone(),
                }
            })?;
            dates.push(date);

            for (i, column) in columns.iter().enumerate() {
                let raw = record.get(i + 1).unwrap_or_default();
                let price = raw.parse::<f64>().map_err(|_| FileError::InvalidPrice {
                    line,
                    column: column.clone(),
                    value: raw.to_string(),
                })?;
                prices[i].push(price);
            }
        }

        Ok(Self {
            dates,
            columns,
            prices,
        })
    }

    /// Instrument column names, in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Row dates, in file order.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the file has no data rows.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns true if the file has the given instrument column.
    pub fn has_column(&self, column: &str) -> bool {
        self.column_index(column).is_some()
    }

    /// Extracts one instrument's price history, oldest date first.
    ///
    /// # Errors
    ///
    /// - `FileError::UnknownColumn` if the column is absent
    /// - `FileError::Series` if the dates repeat or change direction
    pub fn series(&self, column: &str) -> FileResult<TimeSeries> {
        let index = self
            .column_index(column)
            .ok_or_else(|| FileError::UnknownColumn {
                column: column.to_string(),
                available: self.columns.join(", "),
            })?;

        let points = self
            .dates
            .iter()
            .copied()
            .zip(self.prices[index].iter().copied())
            .collect();
        Ok(TimeSeries::new(column, points)?)
    }

    /// Extracts every instrument's price history, in header order.
    pub fn all_series(&self) -> FileResult<Vec<TimeSeries>> {
        self.columns.iter().map(|column| self.series(column)).collect()
    }

    fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }
}
