//! Domain types.
//!
//! - [`Date`]: calendar date
//! - [`Tenor`]: relative maturity such as `90d`
//! - [`MaturitySpec`]: explicit date or tenor text
//! - [`Currency`]: ISO currency codes
//! - [`Direction`]: receive or pay

mod currency;
mod date;
mod direction;
mod maturity;
mod tenor;

pub use currency::Currency;
pub use date::Date;
pub use direction::Direction;
pub use maturity::MaturitySpec;
pub use tenor::{Tenor, TenorUnit};
