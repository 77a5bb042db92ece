//! VaR run configuration.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use histvar_ext_file::{PriceFileOptions, PriceTable, DEFAULT_DATE_FORMAT};
use histvar_risk::{EstimatorKind, InstrumentConfig};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

fn default_delimiter() -> char {
    '\t'
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_horizon_days() -> f64 {
    1.0
}

// =============================================================================
// INSTRUMENT SPEC
// =============================================================================

/// One position in a VaR run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstrumentSpec {
    /// Price column in the price file.
    pub column: String,

    /// Display name (defaults to the column).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Signed position value.
    pub notional: Decimal,

    /// Overrides the run's horizon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizon_days: Option<f64>,

    /// Return estimator.
    #[serde(default)]
    pub estimator: EstimatorKind,
}

impl InstrumentSpec {
    /// Creates a position on a price column with the default estimator.
    pub fn new(column: impl Into<String>, notional: Decimal) -> Self {
        Self {
            column: column.into(),
            name: None,
            notional,
            horizon_days: None,
            estimator: EstimatorKind::default(),
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a per-instrument horizon.
    #[must_use]
    pub fn with_horizon_days(mut self, horizon_days: f64) -> Self {
        self.horizon_days = Some(horizon_days);
        self
    }

    /// Sets the return estimator.
    #[must_use]
    pub fn with_estimator(mut self, estimator: EstimatorKind) -> Self {
        self.estimator = estimator;
        self
    }

    /// Name used in logs and errors.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.column)
    }
}

// =============================================================================
// VAR RUN CONFIG
// =============================================================================

/// A complete VaR run: price source plus positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VarRunConfig {
    /// Run name.
    pub name: String,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Price file; relative paths resolve against the configuration file.
    pub price_file: PathBuf,

    /// Price file field delimiter.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Price file date format.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Default horizon for every instrument.
    #[serde(default = "default_horizon_days")]
    pub horizon_days: f64,

    /// Positions.
    #[serde(default)]
    pub instruments: Vec<InstrumentSpec>,
}

impl VarRunConfig {
    /// Creates a run with default file options and no positions.
    pub fn new(name: impl Into<String>, price_file: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            description: None,
            price_file: price_file.into(),
            delimiter: default_delimiter(),
            date_format: default_date_format(),
            horizon_days: default_horizon_days(),
            instruments: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the price file delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the price file date format.
    #[must_use]
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Sets the default horizon.
    #[must_use]
    pub fn with_horizon_days(mut self, horizon_days: f64) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    /// Adds a position.
    #[must_use]
    pub fn with_instrument(mut self, instrument: InstrumentSpec) -> Self {
        self.instruments.push(instrument);
        self
    }

    /// Loads and validates a configuration file.
    ///
    /// The format follows the extension (`.toml` or `.json`).
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let mut config = match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        if config.price_file.is_relative() {
            if let Some(dir) = path.parent() {
                config.price_file = dir.join(&config.price_file);
            }
        }

        info!(
            "Loaded VaR configuration '{}' with {} instruments from {}",
            config.name,
            config.instruments.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parses and validates a TOML configuration.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Price file reader options.
    pub fn price_file_options(&self) -> PriceFileOptions {
        // Validation guarantees an ASCII delimiter.
        let delimiter = u8::try_from(self.delimiter).unwrap_or(b'\t');
        PriceFileOptions::default()
            .with_delimiter(delimiter)
            .with_date_format(self.date_format.clone())
    }

    /// Reads the configured price file.
    pub fn load_prices(&self) -> ConfigResult<PriceTable> {
        Ok(PriceTable::from_path(
            &self.price_file,
            &self.price_file_options(),
        )?)
    }

    /// Builds engine inputs from an already loaded price table.
    pub fn instrument_configs(&self, table: &PriceTable) -> ConfigResult<Vec<InstrumentConfig>> {
        self.instruments
            .iter()
            .map(|spec| {
                let series = table.series(&spec.column)?;
                let notional = spec.notional.to_f64().ok_or_else(|| ConfigError::Validation {
                    field: format!("instruments.{}.notional", spec.column),
                    message: format!("notional {} is not representable", spec.notional),
                })?;
                let horizon_days = spec.horizon_days.unwrap_or(self.horizon_days);

                debug!(
                    "Configured {} on column {} with notional {}, horizon {} and {}",
                    spec.display_name(),
                    spec.column,
                    spec.notional,
                    horizon_days,
                    spec.estimator
                );

                Ok(InstrumentConfig::new(series, notional)
                    .with_name(spec.display_name())
                    .with_horizon_days(horizon_days)
                    .with_shared_estimator(spec.estimator.estimator()))
            })
            .collect()
    }

    /// Reads the price file and builds engine inputs.
    pub fn build(&self) -> ConfigResult<Vec<InstrumentConfig>> {
        let table = self.load_prices()?;
        self.instrument_configs(&table)
    }
}

fn validate_horizon(field: String, horizon_days: f64, errors: &mut Vec<ValidationError>) {
    if !horizon_days.is_finite() || horizon_days < 0.0 {
        errors.push(ValidationError::with_rule(
            field,
            format!("Horizon {horizon_days} must be a finite, non-negative number of days"),
            "valid_horizon",
        ));
    }
}

impl Validate for VarRunConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "Name cannot be empty"));
        }

        if self.price_file.as_os_str().is_empty() {
            errors.push(ValidationError::new("price_file", "Price file cannot be empty"));
        }

        if !self.delimiter.is_ascii() {
            errors.push(ValidationError::with_rule(
                "delimiter",
                format!("Delimiter '{}' must be a single ASCII character", self.delimiter),
                "ascii_delimiter",
            ));
        }

        if self.date_format.trim().is_empty() {
            errors.push(ValidationError::new("date_format", "Date format cannot be empty"));
        }

        validate_horizon("horizon_days".to_string(), self.horizon_days, &mut errors);

        if self.instruments.is_empty() {
            errors.push(ValidationError::with_rule(
                "instruments",
                "At least one instrument is required",
                "non_empty_portfolio",
            ));
        }

        let mut columns = HashSet::new();
        for (i, spec) in self.instruments.iter().enumerate() {
            if spec.column.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("instruments[{i}].column"),
                    "Column cannot be empty",
                ));
            } else if !columns.insert(spec.column.as_str()) {
                errors.push(ValidationError::with_rule(
                    format!("instruments[{i}].column"),
                    format!("Column '{}' is listed more than once", spec.column),
                    "unique_columns",
                ));
            }

            if let Some(horizon_days) = spec.horizon_days {
                validate_horizon(
                    format!("instruments[{i}].horizon_days"),
                    horizon_days,
                    &mut errors,
                );
            }
        }

        errors
    }
}
