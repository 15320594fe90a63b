//! # Toyval Core
//!
//! Core types shared by the Toyval client SDK and the reference Platform.
//!
//! - **Types**: `Date`, `Tenor`, `MaturitySpec`, `Currency`, `Direction`
//! - **Calendars**: business day calendars and adjustment conventions
//! - **Maturity conventions**: named calendar/adjustment pairs such as
//!   `"NewYorkModFoll"` or `"NoHolidays"`
//! - **Day counts**: ACT/365 Fixed
//!
//! ## Example
//!
//! ```rust
//! use toyval_core::prelude::*;
//!
//! let today = Date::from_ymd(2025, 1, 15).unwrap();
//! let convention: MaturityConvention = "NoHolidays".parse().unwrap();
//! let tenor: Tenor = "90d".parse().unwrap();
//!
//! let maturity = convention.resolve(today, &MaturitySpec::from(tenor)).unwrap();
//! assert_eq!(maturity, today.add_days(90));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{BusinessDayConvention, Calendar, CalendarId, MaturityConvention};
    pub use crate::daycounts::{Act365Fixed, DayCount};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Currency, Date, Direction, MaturitySpec, Tenor, TenorUnit};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Currency, Date, Direction, MaturitySpec, Tenor, TenorUnit};
