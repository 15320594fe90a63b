//! Doc command implementation.
//!
//! Shows the graph `value` would submit. Nothing is sent to the Platform.

use anyhow::Result;
use clap::Args;

use toyval_client::ValuationClient;

use crate::commands::ValuationArgs;
use crate::output::print_json;

/// Arguments for the doc command.
#[derive(Args, Debug)]
pub struct DocArgs {
    #[command(flatten)]
    pub valuation: ValuationArgs,
}

/// Execute the doc command.
pub fn execute(client: &ValuationClient, args: DocArgs) -> Result<()> {
    let request = args.valuation.request()?;
    let document = client.document(&request)?;
    print_json(&document)
}
