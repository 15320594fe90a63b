//! Toyval CLI - value a single cashflow on a Platform.
//!
//! # Usage
//!
//! ```bash
//! # Run the reference demonstration
//! toyval demo
//!
//! # Value 1,000,000 USD received in 3 months at 2%
//! toyval value --rate 0.02 --maturity 3m
//!
//! # Against a remote Platform
//! toyval --endpoint http://localhost:8080 value --rate 0.02 --maturity 2026-06-30
//!
//! # Show the graph that would be submitted
//! toyval doc --rate 0.02 --maturity 90d --convention NoHolidays
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use toyval_client::ValuationClient;
use toyval_config::{ToyvalConfig, Validate};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config =
        ToyvalConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(endpoint) = &cli.endpoint {
        config.client.endpoint = Some(endpoint.clone());
        config.validate_or_error()?;
    }

    init_logging(&config, cli.verbose);

    let client = ValuationClient::from_config(&config.client)?;
    let format = cli.format;

    // Execute command
    match cli.command {
        Commands::Demo(args) => commands::demo::execute(&client, args, format)?,
        Commands::Value(args) => commands::value::execute(&client, args, format)?,
        Commands::Doc(args) => commands::doc::execute(&client, args)?,
    }

    Ok(())
}

/// Logs go to stderr so that stdout stays machine-readable.
fn init_logging(config: &ToyvalConfig, verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new(&config.logging.filter)
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
