//! Session: the entry point for building and submitting graphs.

use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, instrument};

use toyval_core::{Currency, Date, Direction, MaturitySpec};
use toyval_traits::{Document, PlatformClient, ResultTable, ValuationSpecification};

use crate::error::{GraphError, GraphResult};
use crate::handle::{
    Handle, MaturityDateNode, ModelNode, Namer, Node, Op, PaymentDate, ProductNode, ValuationNode,
};
use crate::serialize;

/// Builds lazy handles and submits them to an injected Platform client.
///
/// A session holds no graph state of its own beyond an object-name counter;
/// the graph lives in the handles.
#[derive(Clone)]
pub struct Session {
    client: Arc<dyn PlatformClient>,
    namer: Arc<Namer>,
}

impl Session {
    /// Creates a session over a client.
    pub fn new(client: Arc<dyn PlatformClient>) -> Self {
        Self {
            client,
            namer: Arc::new(Namer::default()),
        }
    }

    /// The client this session submits to.
    pub fn client(&self) -> &Arc<dyn PlatformClient> {
        &self.client
    }

    fn node<T>(&self, op: Op) -> Handle<T> {
        Handle::from_node(Node::new(op, Arc::clone(&self.namer)))
    }

    /// Lazily resolves `maturity` against `anchor` under a named convention.
    ///
    /// The convention name is forwarded verbatim; only the Platform decides
    /// whether it is known.
    pub fn maturity_date(
        &self,
        anchor: Date,
        maturity: impl Into<MaturitySpec>,
        convention: impl Into<String>,
    ) -> Handle<MaturityDateNode> {
        self.node(Op::MaturityDate {
            anchor,
            maturity: maturity.into(),
            convention: convention.into(),
        })
    }

    /// Lazily creates a single fixed cashflow product.
    pub fn create_single_cashflow_product(
        &self,
        direction: Direction,
        notional: Decimal,
        currency: Currency,
        payment_date: impl Into<PaymentDate>,
    ) -> Handle<ProductNode> {
        self.node(Op::SingleCashflowProduct {
            direction,
            notional,
            currency,
            payment_date: payment_date.into().into(),
        })
    }

    /// Lazily adds a flat discount curve to `base` (or to an empty model).
    pub fn add_simple_discount_curve_to_model(
        &self,
        base: Option<&Handle<ModelNode>>,
        currency: Currency,
        anchor: Date,
        rate: f64,
    ) -> Handle<ModelNode> {
        self.node(Op::SimpleDiscountCurve {
            base: base.map(|h| Arc::clone(&h.node)),
            currency,
            anchor,
            rate,
        })
    }

    /// Lazily values `product` under `model`.
    pub fn value_product(
        &self,
        model: &Handle<ModelNode>,
        product: &Handle<ProductNode>,
        specification: ValuationSpecification,
        output: impl Into<String>,
    ) -> Handle<ValuationNode> {
        self.node(Op::ValueProduct {
            model: Arc::clone(&model.node),
            product: Arc::clone(&product.node),
            specification,
            output: output.into(),
        })
    }

    /// Serializes the graph rooted at `root` without submitting it.
    pub fn document<T>(&self, root: &Handle<T>) -> GraphResult<Document> {
        serialize::to_document(&root.node)
    }

    /// Submits the graph rooted at `root` and awaits its value.
    ///
    /// Exactly one call to [`PlatformClient::evaluate`] is made. Platform
    /// errors come back unchanged inside [`GraphError::Platform`].
    #[instrument(skip_all, fields(root = %root.name(), client = self.client.name()))]
    pub async fn evaluate<T>(&self, root: &Handle<T>) -> GraphResult<ResultTable> {
        let document = self.document(root)?;
        debug!(
            request_id = %document.request_id,
            nodes = document.len(),
            "Submitting graph"
        );

        let table = self.client.evaluate(&document).await?;

        debug!(request_id = %document.request_id, rows = table.len(), "Graph evaluated");
        Ok(table)
    }

    /// Blocking form of [`evaluate`](Self::evaluate) for synchronous callers.
    ///
    /// Must not be called from inside an async runtime; use `evaluate` there.
    pub fn wait<T>(&self, root: &Handle<T>) -> GraphResult<ResultTable> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(GraphError::Runtime(
                "wait() called inside an async runtime; await evaluate() instead".into(),
            ));
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| GraphError::Runtime(e.to_string()))?;
        runtime.block_on(self.evaluate(root))
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("client", &self.client.name())
            .finish()
    }
}
