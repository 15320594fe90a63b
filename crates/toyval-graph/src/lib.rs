//! # Toyval Graph
//!
//! Lazy construction of Platform computation graphs.
//!
//! Every object-creating call on a [`Session`] returns a typed [`Handle`] and
//! does nothing else: no I/O, no evaluation. Handles reference the handles they
//! were built from, forming a small DAG. Only [`Session::evaluate`] (or the
//! blocking [`Session::wait`]) serializes the graph reachable from one root and
//! submits it, in a single round trip, to the injected
//! [`PlatformClient`](toyval_traits::PlatformClient).
//!
//! ```rust,ignore
//! let session = Session::new(client);
//! let maturity = session.maturity_date(today, "90d", "NoHolidays");
//! let product = session.create_single_cashflow_product(
//!     Direction::Receive, dec!(1000000), Currency::USD, &maturity);
//! let model = session.add_simple_discount_curve_to_model(None, Currency::USD, today, 0.01);
//! let value = session.value_product(&model, &product, ValuationSpecification::ClosedForm, "Value");
//!
//! let table = session.evaluate(&value).await?; // the only round trip
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod handle;
mod serialize;
pub mod session;

pub use error::{GraphError, GraphResult};
pub use handle::{
    Handle, MaturityDateNode, ModelNode, PaymentDate, ProductNode, SubArrayNode, ValuationNode,
};
pub use session::Session;
