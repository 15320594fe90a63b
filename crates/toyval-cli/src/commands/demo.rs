//! Demo command implementation.
//!
//! Values 1,000,000 USD received in 90 days at 1% with no holiday adjustment,
//! checks the result against the known value, then checks that the explicit
//! maturity date gives exactly the same number.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use toyval_client::{ValuationClient, ValuationRequest};
use toyval_core::{Date, MaturitySpec};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{format_amount, print_header, print_json, print_success, print_table, KeyValue};

const RATE: f64 = 0.01;
const TENOR: &str = "90d";
const TENOR_DAYS: i64 = 90;
const CONVENTION: &str = "NoHolidays";
const EXPECTED: f64 = 997_549.50;

/// Arguments for the demo command.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Anchor date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub as_of: Option<String>,
}

/// Demo result.
#[derive(Debug, Serialize)]
pub struct DemoResult {
    pub as_of: Date,
    pub by_tenor: f64,
    pub by_date: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Execute the demo command.
pub fn execute(client: &ValuationClient, args: DemoArgs, format: OutputFormat) -> Result<()> {
    let as_of = match &args.as_of {
        Some(s) => super::parse_date(s)?,
        None => Date::today(),
    };

    let by_tenor = client.value_blocking(
        &ValuationRequest::new(RATE, MaturitySpec::tenor(TENOR))
            .with_convention(CONVENTION)
            .as_of(as_of),
    )?;
    if round2(by_tenor) != EXPECTED {
        return Err(CliError::DemoCheck(format!(
            "{TENOR} value {by_tenor} does not round to {EXPECTED:.2}"
        ))
        .into());
    }

    let maturity = as_of.add_days(TENOR_DAYS);
    let by_date = client.value_blocking(
        &ValuationRequest::new(RATE, maturity)
            .with_convention(CONVENTION)
            .as_of(as_of),
    )?;
    if by_date != by_tenor {
        return Err(CliError::DemoCheck(format!(
            "value for {maturity} ({by_date}) differs from {TENOR} value ({by_tenor})"
        ))
        .into());
    }

    let result = DemoResult {
        as_of,
        by_tenor,
        by_date,
    };
    match format {
        OutputFormat::Table => {
            print_header("Toy valuation");
            print_table(&[
                KeyValue::new("As of", as_of.to_string()),
                KeyValue::new(format!("PV ({TENOR}, {CONVENTION})"), format_amount(by_tenor)),
                KeyValue::new(format!("PV ({maturity}, {CONVENTION})"), format_amount(by_date)),
            ]);
            print_success("both checks passed");
        }
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Minimal => println!("{}", result.by_tenor),
    }

    Ok(())
}
