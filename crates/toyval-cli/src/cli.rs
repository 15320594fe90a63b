//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{DemoArgs, DocArgs, ValueArgs};

/// Toyval - value single cashflows on a lazy-graph Platform
#[derive(Parser)]
#[command(name = "toyval")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (TOML)
    #[arg(short, long, env = "TOYVAL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Platform base URL; without it the in-process Platform is used
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Log at the configured level instead of warnings only
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the reference demonstration and check its results
    Demo(DemoArgs),

    /// Value 1,000,000 USD received at a maturity
    Value(ValueArgs),

    /// Print the document a valuation would submit, without submitting it
    Doc(DocArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Minimal output (just the value)
    Minimal,
}
