//! # Toyval Client
//!
//! Values a single fixed cashflow on a remote (or in-process) Platform.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use toyval_client::ValuationClient;
//! use toyval_platform::LocalPlatform;
//!
//! let client = ValuationClient::new(Arc::new(LocalPlatform::new()));
//! let pv = client.toy_valuation(0.01, "90d", "NoHolidays").await?;
//! ```
//!
//! All financial logic runs on the Platform. The client checks its inputs,
//! builds a four-node graph, submits it once and reads row 0, column 1 of the
//! returned table.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod factory;
pub mod http;
pub mod validation;
pub mod valuation;

pub use error::{ValuationError, ValuationResult};
pub use factory::platform_client;
pub use http::HttpPlatformClient;
pub use validation::ValidationError;
pub use valuation::{ValuationClient, ValuationRequest, NOTIONAL, OUTPUT_NAME};
