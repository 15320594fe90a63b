//! CLI command implementations.

pub mod demo;
pub mod doc;
pub mod value;

// Re-export submodules for convenience
pub use demo::DemoArgs;
pub use doc::DocArgs;
pub use value::ValueArgs;

use clap::Args;

use toyval_client::ValuationRequest;
use toyval_core::{Date, MaturitySpec};

use crate::error::{CliError, CliResult};

/// Valuation inputs shared by `value` and `doc`.
#[derive(Args, Debug, Clone)]
pub struct ValuationArgs {
    /// Annually compounded ACT/365F discount rate (0.01 for 1%)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Maturity: a date (YYYY-MM-DD) or a tenor such as 90d, 3m, 1y
    #[arg(short, long)]
    pub maturity: String,

    /// Maturity convention, e.g. NewYorkModFoll or NoHolidays [default: from config]
    #[arg(long)]
    pub convention: Option<String>,

    /// Anchor date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub as_of: Option<String>,
}

impl ValuationArgs {
    /// Builds the request these arguments describe.
    pub fn request(&self) -> CliResult<ValuationRequest> {
        let mut request = ValuationRequest::new(self.rate, MaturitySpec::from_text(&self.maturity));
        if let Some(convention) = &self.convention {
            request = request.with_convention(convention.clone());
        }
        if let Some(as_of) = &self.as_of {
            request = request.as_of(parse_date(as_of)?);
        }
        Ok(request)
    }
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}
