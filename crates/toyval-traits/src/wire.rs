//! The serialized graph submitted to a Platform.
//!
//! A [`Document`] is a flat list of [`WireNode`]s in dependency order: a node
//! only refers to nodes that appear before it. The last node a caller cares
//! about is named by [`Document::root`].
//!
//! ```json
//! {
//!   "request_id": "6f0c…",
//!   "root": "ValueProduct_4",
//!   "nodes": [
//!     {"id": "MaturityDate_1", "call": {"function": "MaturityDate", "anchor": "2025-01-15",
//!       "maturity": {"tenor": "90d"}, "convention": "NoHolidays"}},
//!     …
//!   ]
//! }
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use toyval_core::{Currency, Date, Direction, MaturitySpec};

/// Object name of a node, unique within a document.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a new node ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A date argument: either a literal or the output of another node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateArg {
    /// Literal date.
    Date(Date),
    /// Output of a `MaturityDate` node.
    Ref(NodeId),
}

impl From<Date> for DateArg {
    fn from(date: Date) -> Self {
        DateArg::Date(date)
    }
}

/// How a product is valued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ValuationSpecification {
    /// Analytic discounting of known cashflows.
    #[default]
    ClosedForm,
}

impl fmt::Display for ValuationSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValuationSpecification::ClosedForm => write!(f, "ClosedForm"),
        }
    }
}

/// A Platform function call with its arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "function")]
pub enum Call {
    /// Resolve a maturity against an anchor date under a named convention.
    MaturityDate {
        /// Anchor ("today").
        anchor: Date,
        /// Explicit date or raw tenor text.
        maturity: MaturitySpec,
        /// Convention name, forwarded verbatim.
        convention: String,
    },

    /// A single fixed cashflow.
    CreateSingleCashflowProduct {
        /// Receive or pay.
        direction: Direction,
        /// Cashflow amount.
        notional: Decimal,
        /// Cashflow currency.
        currency: Currency,
        /// Payment date.
        payment_date: DateArg,
    },

    /// Add a flat discount curve to a model (or to an empty one).
    AddSimpleDiscountCurveToModel {
        /// Base model, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        model: Option<NodeId>,
        /// Curve currency.
        currency: Currency,
        /// Curve anchor date.
        anchor: Date,
        /// Annually compounded ACT/365F rate.
        rate: f64,
    },

    /// Value a product under a model.
    ValueProduct {
        /// Model node.
        model: NodeId,
        /// Product node.
        product: NodeId,
        /// Valuation method.
        specification: ValuationSpecification,
        /// Name of the output measure.
        output: String,
    },

    /// Pick one cell out of a table-valued node.
    SubArray {
        /// Table-valued node.
        source: NodeId,
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        column: usize,
    },
}

impl Call {
    /// Platform function name, also used for auto-generated object names.
    pub fn function(&self) -> &'static str {
        match self {
            Call::MaturityDate { .. } => "MaturityDate",
            Call::CreateSingleCashflowProduct { .. } => "CreateSingleCashflowProduct",
            Call::AddSimpleDiscountCurveToModel { .. } => "AddSimpleDiscountCurveToModel",
            Call::ValueProduct { .. } => "ValueProduct",
            Call::SubArray { .. } => "SubArray",
        }
    }

    /// Nodes this call reads.
    pub fn references(&self) -> Vec<&NodeId> {
        match self {
            Call::MaturityDate { .. } => Vec::new(),
            Call::CreateSingleCashflowProduct { payment_date, .. } => match payment_date {
                DateArg::Ref(id) => vec![id],
                DateArg::Date(_) => Vec::new(),
            },
            Call::AddSimpleDiscountCurveToModel { model, .. } => model.iter().collect(),
            Call::ValueProduct { model, product, .. } => vec![model, product],
            Call::SubArray { source, .. } => vec![source],
        }
    }
}

/// One node of a [`Document`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireNode {
    /// Object name.
    pub id: NodeId,
    /// Function call.
    pub call: Call,
}

impl WireNode {
    /// Creates a node.
    pub fn new(id: impl Into<NodeId>, call: Call) -> Self {
        Self {
            id: id.into(),
            call,
        }
    }
}

/// A complete evaluation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Correlation ID for logs on both sides.
    pub request_id: Uuid,
    /// Node whose value is returned.
    pub root: NodeId,
    /// Nodes in dependency order.
    pub nodes: Vec<WireNode>,
}

impl Document {
    /// Creates a document with a fresh request ID.
    pub fn new(root: NodeId, nodes: Vec<WireNode>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            root,
            nodes,
        }
    }

    /// Looks up a node by ID.
    pub fn node(&self, id: &NodeId) -> Option<&WireNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the document has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
