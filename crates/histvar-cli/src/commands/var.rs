//! VaR command implementation.
//!
//! Runs the historical-simulation engine over a configured portfolio.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use histvar_config::{InstrumentSpec, Validate, VarRunConfig};
use histvar_risk::{EstimatorKind, VarCalculationEngine, VarReport};

use crate::cli::OutputFormat;
use crate::commands::{parse_delimiter, parse_position};
use crate::error::CliError;
use crate::output::{format_amount, print_header, print_json_single, print_output, print_warning, KeyValue};

/// Arguments for the var command.
#[derive(Args, Debug)]
pub struct VarArgs {
    /// Run configuration file (.toml or .json)
    #[arg(short, long, conflicts_with_all = ["file", "positions"])]
    pub config: Option<PathBuf>,

    /// Price file with a date column followed by one column per instrument
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Position as COLUMN=NOTIONAL (repeatable)
    #[arg(short, long = "position", value_name = "COLUMN=NOTIONAL")]
    pub positions: Vec<String>,

    /// Risk horizon in days
    #[arg(long, default_value = "1", conflicts_with = "config")]
    pub horizon: f64,

    /// Return estimator: log-shift, simple-shift or absolute-shift
    #[arg(short, long, default_value = "log-shift", conflicts_with = "config")]
    pub estimator: EstimatorKind,

    /// Price file delimiter ('tab' or a single character)
    #[arg(long, default_value = "tab", conflicts_with = "config")]
    pub delimiter: String,

    /// Price file date format (chrono syntax)
    #[arg(long, default_value = "%d/%m/%Y", conflicts_with = "config")]
    pub date_format: String,
}

/// VaR result for JSON output.
#[derive(Debug, Serialize)]
struct VarOutput<'a> {
    portfolio: &'a str,
    #[serde(flatten)]
    report: &'a VarReport,
}

impl VarArgs {
    /// Builds the run configuration from a file or the command line.
    fn run_config(&self) -> Result<VarRunConfig> {
        if let Some(ref path) = self.config {
            return Ok(VarRunConfig::from_file(path)?);
        }

        let file = self
            .file
            .clone()
            .ok_or_else(|| CliError::MissingArgument("--config or --file".to_string()))?;
        if self.positions.is_empty() {
            return Err(CliError::MissingArgument("--position".to_string()).into());
        }

        let mut config = VarRunConfig::new("command-line", file)
            .with_delimiter(parse_delimiter(&self.delimiter)?)
            .with_date_format(self.date_format.clone())
            .with_horizon_days(self.horizon);
        for position in &self.positions {
            let (column, notional) = parse_position(position)?;
            config = config
                .with_instrument(InstrumentSpec::new(column, notional).with_estimator(self.estimator));
        }

        config.validate_or_error()?;
        Ok(config)
    }
}

/// Execute the var command.
pub fn execute(args: VarArgs, format: OutputFormat) -> Result<()> {
    let config = args.run_config()?;
    let instruments = config.build()?;
    let report = VarCalculationEngine::new().run_report(&instruments)?;

    if !report.is_reference_window() && format == OutputFormat::Table {
        print_warning(&format!(
            "{} scenarios; the 99% interpolation assumes 260",
            report.observations
        ));
    }

    match format {
        OutputFormat::Minimal => {
            println!("{}", format_amount(report.var));
        }
        OutputFormat::Json => {
            print_json_single(&VarOutput {
                portfolio: &config.name,
                report: &report,
            })?;
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new("Portfolio", config.name.clone()),
                KeyValue::new("Instruments", report.instruments.to_string()),
                KeyValue::new("Scenarios", report.observations.to_string()),
                KeyValue::new(
                    "Confidence",
                    format!("{:.0}%", report.confidence_level * 100.0),
                ),
                KeyValue::new(
                    "2nd Worst",
                    format!(
                        "{} on {}",
                        format_amount(report.second_worst.pnl),
                        report.second_worst.date
                    ),
                ),
                KeyValue::new(
                    "3rd Worst",
                    format!(
                        "{} on {}",
                        format_amount(report.third_worst.pnl),
                        report.third_worst.date
                    ),
                ),
                KeyValue::new("VaR", format_amount(report.var)),
            ];

            if format == OutputFormat::Table {
                print_header("Historical VaR");
            }
            print_output(&rows, format)?;
        }
    }

    Ok(())
}
