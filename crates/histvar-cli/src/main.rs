//! HistVaR CLI - Command-line interface for historical-simulation VaR.
//!
//! # Usage
//!
//! ```bash
//! # VaR from a run configuration
//! histvar var --config fx-book.toml
//!
//! # VaR from a price file and ad-hoc positions
//! histvar var --file prices.tsv --position ccy-1=153084.81 --position ccy-2=95891.51
//!
//! # Price a European option on a forward
//! histvar price --forward 19.04367 --strike 17 --expiry 0.46 --vol 0.3 --rate 0.005 --type call
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

const DEFAULT_LOG_FILTER: &str = "warn,histvar=info";
const VERBOSE_LOG_FILTER: &str = "info,histvar=debug";

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_LOG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!("histvar v{}", env!("CARGO_PKG_VERSION"));

    let format = cli.format;

    match cli.command {
        Commands::Var(args) => commands::var::execute(args, format)?,
        Commands::Price(args) => commands::price::execute(args, format)?,
    }

    Ok(())
}
