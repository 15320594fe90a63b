//! # Toyval Platform
//!
//! A small reference Platform that evaluates [`Document`](toyval_traits::Document)s
//! in process. It knows exactly the functions the valuation SDK submits:
//!
//! | function | produces |
//! |---|---|
//! | `MaturityDate` | adjusted date |
//! | `CreateSingleCashflowProduct` | [`SingleCashflow`] |
//! | `AddSimpleDiscountCurveToModel` | [`DiscountModel`] |
//! | `ValueProduct` | `[[currency, pv]]` |
//! | `SubArray` | one cell |
//!
//! [`LocalPlatform`] exposes it through the
//! [`PlatformClient`](toyval_traits::PlatformClient) trait, so it can be injected
//! wherever a remote client would be.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod curve;
pub mod error;
pub mod evaluator;
pub mod local;
pub mod pricing;
pub mod product;
pub mod validate;
pub mod value;

pub use curve::{DiscountModel, FlatCurve};
pub use error::{ModelError, ModelResult};
pub use evaluator::Evaluator;
pub use local::LocalPlatform;
pub use product::SingleCashflow;
pub use value::Value;
