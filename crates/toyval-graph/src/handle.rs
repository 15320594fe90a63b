//! Typed lazy handles and the node descriptors behind them.
//!
//! A [`Handle<T>`] is a cheap, cloneable reference to an immutable node
//! descriptor. The type parameter records what the node produces, so that for
//! example a model cannot be passed where a product is expected.

use rust_decimal::Decimal;
use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use toyval_core::{Currency, Date, Direction, MaturitySpec};
use toyval_traits::ValuationSpecification;

// =============================================================================
// NODE KINDS
// =============================================================================

/// Handle kind: a resolved maturity date.
#[derive(Debug, Clone, Copy)]
pub enum MaturityDateNode {}

/// Handle kind: a product.
#[derive(Debug, Clone, Copy)]
pub enum ProductNode {}

/// Handle kind: a valuation model.
#[derive(Debug, Clone, Copy)]
pub enum ModelNode {}

/// Handle kind: a valuation result table.
#[derive(Debug, Clone, Copy)]
pub enum ValuationNode {}

/// Handle kind: one cell picked out of a table.
#[derive(Debug, Clone, Copy)]
pub enum SubArrayNode {}

// =============================================================================
// DESCRIPTORS
// =============================================================================

/// Per-session object-name counter.
#[derive(Debug, Default)]
pub(crate) struct Namer {
    next: AtomicU64,
}

impl Namer {
    pub(crate) fn name(&self, function: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{function}_{n}")
    }
}

/// A date input that may come from another node.
#[derive(Debug, Clone)]
pub(crate) enum DateInput {
    Literal(Date),
    Node(Arc<Node>),
}

/// The pending operation a node stands for.
#[derive(Debug, Clone)]
pub(crate) enum Op {
    MaturityDate {
        anchor: Date,
        maturity: MaturitySpec,
        convention: String,
    },
    SingleCashflowProduct {
        direction: Direction,
        notional: Decimal,
        currency: Currency,
        payment_date: DateInput,
    },
    SimpleDiscountCurve {
        base: Option<Arc<Node>>,
        currency: Currency,
        anchor: Date,
        rate: f64,
    },
    ValueProduct {
        model: Arc<Node>,
        product: Arc<Node>,
        specification: ValuationSpecification,
        output: String,
    },
    SubArray {
        source: Arc<Node>,
        row: usize,
        column: usize,
    },
}

impl Op {
    pub(crate) fn function(&self) -> &'static str {
        match self {
            Op::MaturityDate { .. } => "MaturityDate",
            Op::SingleCashflowProduct { .. } => "CreateSingleCashflowProduct",
            Op::SimpleDiscountCurve { .. } => "AddSimpleDiscountCurveToModel",
            Op::ValueProduct { .. } => "ValueProduct",
            Op::SubArray { .. } => "SubArray",
        }
    }

    /// Nodes this operation reads.
    pub(crate) fn dependencies(&self) -> Vec<&Arc<Node>> {
        match self {
            Op::MaturityDate { .. } => Vec::new(),
            Op::SingleCashflowProduct { payment_date, .. } => match payment_date {
                DateInput::Node(node) => vec![node],
                DateInput::Literal(_) => Vec::new(),
            },
            Op::SimpleDiscountCurve { base, .. } => base.iter().collect(),
            Op::ValueProduct { model, product, .. } => vec![model, product],
            Op::SubArray { source, .. } => vec![source],
        }
    }
}

/// Immutable node descriptor.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) name: String,
    pub(crate) op: Op,
    pub(crate) namer: Arc<Namer>,
}

impl Node {
    pub(crate) fn new(op: Op, namer: Arc<Namer>) -> Arc<Self> {
        Arc::new(Self {
            name: namer.name(op.function()),
            op,
            namer,
        })
    }
}

// =============================================================================
// HANDLE
// =============================================================================

/// Typed reference to a not-yet-evaluated Platform object.
pub struct Handle<T> {
    pub(crate) node: Arc<Node>,
    _kind: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    pub(crate) fn from_node(node: Arc<Node>) -> Self {
        Self {
            node,
            _kind: PhantomData,
        }
    }

    /// Object name the node will carry on the Platform.
    pub fn name(&self) -> &str {
        &self.node.name
    }

    /// Platform function the node calls.
    pub fn function(&self) -> &'static str {
        self.node.op.function()
    }

    /// Returns the same pending operation under an explicit object name.
    ///
    /// Handles created from `self` before renaming keep pointing at the
    /// auto-named node.
    pub fn named(self, name: impl Into<String>) -> Self {
        let node = Arc::new(Node {
            name: name.into(),
            op: self.node.op.clone(),
            namer: Arc::clone(&self.node.namer),
        });
        Self::from_node(node)
    }

    /// Lazily picks the cell at `(row, column)` of this node's value.
    pub fn sub_array(&self, row: usize, column: usize) -> Handle<SubArrayNode> {
        let op = Op::SubArray {
            source: Arc::clone(&self.node),
            row,
            column,
        };
        Handle::from_node(Node::new(op, Arc::clone(&self.node.namer)))
    }

    /// Returns true if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Handle<T>) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self::from_node(Arc::clone(&self.node))
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("name", &self.node.name)
            .field("function", &self.node.op.function())
            .finish()
    }
}

impl<T> fmt::Display for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.node.name)
    }
}

/// Payment date of a product: a literal date or a maturity-date handle.
#[derive(Debug, Clone)]
pub enum PaymentDate {
    /// Literal date.
    Date(Date),
    /// Output of a `MaturityDate` node.
    Resolved(Handle<MaturityDateNode>),
}

impl From<Date> for PaymentDate {
    fn from(date: Date) -> Self {
        PaymentDate::Date(date)
    }
}

impl From<Handle<MaturityDateNode>> for PaymentDate {
    fn from(handle: Handle<MaturityDateNode>) -> Self {
        PaymentDate::Resolved(handle)
    }
}

impl From<&Handle<MaturityDateNode>> for PaymentDate {
    fn from(handle: &Handle<MaturityDateNode>) -> Self {
        PaymentDate::Resolved(handle.clone())
    }
}

impl From<PaymentDate> for DateInput {
    fn from(date: PaymentDate) -> Self {
        match date {
            PaymentDate::Date(d) => DateInput::Literal(d),
            PaymentDate::Resolved(h) => DateInput::Node(h.node),
        }
    }
}
