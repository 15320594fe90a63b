//! Topological serialization of a handle graph into a [`Document`].

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use toyval_traits::{Call, DateArg, Document, NodeId, WireNode};

use crate::error::{GraphError, GraphResult};
use crate::handle::{DateInput, Node, Op};

/// Key identifying a descriptor by address. Two clones of one handle share it.
fn key(node: &Arc<Node>) -> *const Node {
    Arc::as_ptr(node)
}

/// Serializes everything reachable from `root`, dependencies first.
pub(crate) fn to_document(root: &Arc<Node>) -> GraphResult<Document> {
    let mut graph: DiGraph<Arc<Node>, ()> = DiGraph::new();
    let mut indices: HashMap<*const Node, NodeIndex> = HashMap::new();

    // Depth-first walk from the root; each descriptor is added once.
    let root_idx = graph.add_node(Arc::clone(root));
    indices.insert(key(root), root_idx);
    let mut stack = vec![Arc::clone(root)];

    while let Some(node) = stack.pop() {
        let idx = indices[&key(&node)];
        for dep in node.op.dependencies() {
            let dep_idx = match indices.get(&key(dep)) {
                Some(existing) => *existing,
                None => {
                    let dep_idx = graph.add_node(Arc::clone(dep));
                    indices.insert(key(dep), dep_idx);
                    stack.push(Arc::clone(dep));
                    dep_idx
                }
            };
            // Edge from dependency to user
            graph.add_edge(dep_idx, idx, ());
        }
    }

    let order = toposort(&graph, None).map_err(|_| GraphError::CircularDependency)?;

    let mut seen = HashSet::new();
    let mut nodes = Vec::with_capacity(order.len());
    for idx in order {
        let node = &graph[idx];
        if !seen.insert(node.name.as_str()) {
            return Err(GraphError::DuplicateName(node.name.clone()));
        }
        nodes.push(WireNode::new(node.name.as_str(), to_call(&node.op)));
    }

    Ok(Document::new(NodeId::new(root.name.as_str()), nodes))
}

fn id_of(node: &Arc<Node>) -> NodeId {
    NodeId::new(node.name.as_str())
}

fn to_call(op: &Op) -> Call {
    match op {
        Op::MaturityDate {
            anchor,
            maturity,
            convention,
        } => Call::MaturityDate {
            anchor: *anchor,
            maturity: maturity.clone(),
            convention: convention.clone(),
        },
        Op::SingleCashflowProduct {
            direction,
            notional,
            currency,
            payment_date,
        } => Call::CreateSingleCashflowProduct {
            direction: *direction,
            notional: *notional,
            currency: *currency,
            payment_date: match payment_date {
                DateInput::Literal(date) => DateArg::Date(*date),
                DateInput::Node(node) => DateArg::Ref(id_of(node)),
            },
        },
        Op::SimpleDiscountCurve {
            base,
            currency,
            anchor,
            rate,
        } => Call::AddSimpleDiscountCurveToModel {
            model: base.as_ref().map(id_of),
            currency: *currency,
            anchor: *anchor,
            rate: *rate,
        },
        Op::ValueProduct {
            model,
            product,
            specification,
            output,
        } => Call::ValueProduct {
            model: id_of(model),
            product: id_of(product),
            specification: *specification,
            output: output.clone(),
        },
        Op::SubArray {
            source,
            row,
            column,
        } => Call::SubArray {
            source: id_of(source),
            row: *row,
            column: *column,
        },
    }
}
