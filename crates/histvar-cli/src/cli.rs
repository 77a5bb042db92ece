//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{PriceArgs, VarArgs};

/// HistVaR - historical-simulation Value at Risk
#[derive(Parser)]
#[command(name = "histvar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Log calculation details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Calculate the 99% historical VaR of a portfolio
    Var(VarArgs),

    /// Price a European option on a forward (Black-76)
    Price(PriceArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
