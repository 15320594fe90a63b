//! # Toyval Traits
//!
//! The seam between the lazy-graph client and whatever evaluates the graph.
//!
//! - [`client`]: the [`PlatformClient`] capability (submit a document, await a table)
//! - [`wire`]: the serialized graph ([`Document`], [`WireNode`], [`Call`])
//! - [`result`]: the nested [`ResultTable`] returned by an evaluation
//! - [`error`]: [`PlatformError`], which crosses process boundaries unchanged
//!
//! ## Dependency Injection
//!
//! Callers never look up a global connection; they are handed a client:
//!
//! ```ignore
//! let client: Arc<dyn PlatformClient> = Arc::new(LocalPlatform::new());
//! let valuation = ValuationClient::new(client);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod error;
pub mod result;
pub mod wire;

// Re-export commonly used types
pub use client::PlatformClient;
pub use error::{ErrorBody, PlatformError};
pub use result::{Cell, ResultTable};
pub use wire::{Call, DateArg, Document, NodeId, ValuationSpecification, WireNode};
