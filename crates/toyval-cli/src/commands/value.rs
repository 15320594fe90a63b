//! Value command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use toyval_client::ValuationClient;
use toyval_core::Date;

use crate::cli::OutputFormat;
use crate::commands::ValuationArgs;
use crate::output::{format_amount, print_json, print_table, KeyValue};

/// Arguments for the value command.
#[derive(Args, Debug)]
pub struct ValueArgs {
    #[command(flatten)]
    pub valuation: ValuationArgs,
}

/// Value result.
#[derive(Debug, Serialize)]
pub struct ValueResult {
    pub rate: f64,
    pub maturity: String,
    pub convention: String,
    pub as_of: Date,
    pub currency: &'static str,
    pub present_value: f64,
}

/// Execute the value command.
pub fn execute(client: &ValuationClient, args: ValueArgs, format: OutputFormat) -> Result<()> {
    let mut request = args.valuation.request()?;
    // Pin the anchor so the printed date is the one used
    let as_of = *request.as_of.get_or_insert_with(Date::today);

    let present_value = client.value_blocking(&request)?;

    let result = ValueResult {
        rate: request.rate,
        maturity: request.maturity.to_string(),
        convention: request
            .convention
            .clone()
            .unwrap_or_else(|| client.default_convention().to_string()),
        as_of,
        currency: "USD",
        present_value,
    };

    match format {
        OutputFormat::Table => print_table(&[
            KeyValue::new("As of", result.as_of.to_string()),
            KeyValue::new("Rate", result.rate.to_string()),
            KeyValue::new("Maturity", result.maturity.as_str()),
            KeyValue::new("Convention", result.convention.as_str()),
            KeyValue::new("Currency", result.currency),
            KeyValue::new("Present value", format_amount(result.present_value)),
        ]),
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Minimal => println!("{}", result.present_value),
    }

    Ok(())
}
