//! Price command implementation.
//!
//! Prices a European option on a forward with the Black-76 formula.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use histvar_pricing::{black_scholes_price, CallPut};

use crate::cli::OutputFormat;
use crate::output::{print_header, print_json_single, print_output, KeyValue};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Forward price of the underlying
    #[arg(long, allow_negative_numbers = true)]
    pub forward: f64,

    /// Strike price
    #[arg(short, long, allow_negative_numbers = true)]
    pub strike: f64,

    /// Time to expiry in years
    #[arg(short = 't', long, allow_negative_numbers = true)]
    pub expiry: f64,

    /// Annualised volatility (0.3 for 30%)
    #[arg(long, allow_negative_numbers = true)]
    pub vol: f64,

    /// Continuously compounded interest rate
    #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
    pub rate: f64,

    /// Option type: call or put
    #[arg(long = "type", value_name = "call|put")]
    pub option_type: CallPut,
}

/// Price calculation result.
#[derive(Debug, Serialize)]
struct PriceOutput {
    option_type: CallPut,
    forward: f64,
    strike: f64,
    time_to_expiry: f64,
    volatility: f64,
    interest_rate: f64,
    price: f64,
}

/// Execute the price command.
pub fn execute(args: PriceArgs, format: OutputFormat) -> Result<()> {
    let price = black_scholes_price(
        args.forward,
        args.strike,
        args.expiry,
        args.vol,
        args.rate,
        args.option_type,
    )?;

    match format {
        OutputFormat::Minimal => {
            println!("{:.6}", price);
        }
        OutputFormat::Json => {
            print_json_single(&PriceOutput {
                option_type: args.option_type,
                forward: args.forward,
                strike: args.strike,
                time_to_expiry: args.expiry,
                volatility: args.vol,
                interest_rate: args.rate,
                price,
            })?;
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new("Type", args.option_type.to_string()),
                KeyValue::new("Forward", args.forward.to_string()),
                KeyValue::new("Strike", args.strike.to_string()),
                KeyValue::new("Expiry (years)", args.expiry.to_string()),
                KeyValue::new("Volatility", format!("{:.2}%", args.vol * 100.0)),
                KeyValue::new("Rate", format!("{:.4}%", args.rate * 100.0)),
                KeyValue::new("Price", format!("{:.6}", price)),
            ];

            if format == OutputFormat::Table {
                print_header("Black-76 Option Price");
            }
            print_output(&rows, format)?;
        }
    }

    Ok(())
}
