//! Document evaluation.

use std::collections::HashMap;
use tracing::trace;

use toyval_core::calendars::MaturityConvention;
use toyval_core::Date;
use toyval_traits::{
    Call, Cell, DateArg, Document, NodeId, PlatformError, ResultTable, ValuationSpecification,
};

use crate::curve::{DiscountModel, FlatCurve};
use crate::error::ModelError;
use crate::pricing::closed_form_pv;
use crate::product::SingleCashflow;
use crate::validate::validate;
use crate::value::Value;

/// Output measure accepted by `ValueProduct`.
pub const VALUE_OUTPUT: &str = "Value";

/// Evaluates documents node by node, in document order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Creates an evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Validates and evaluates `document`, returning the root's value as a table.
    pub fn evaluate(&self, document: &Document) -> Result<ResultTable, PlatformError> {
        validate(document)?;

        let mut values: HashMap<&NodeId, Value> = HashMap::with_capacity(document.len());
        for node in &document.nodes {
            let value = Scope { values: &values, node: &node.id }.eval(&node.call)?;
            trace!(node = %node.id, kind = value.kind(), "Node evaluated");
            values.insert(&node.id, value);
        }

        values
            .remove(&document.root)
            .map(|value| value.into_table(document.root.as_str()))
            .ok_or_else(|| PlatformError::InvalidDocument(format!("root '{}' not evaluated", document.root)))
    }
}

/// Evaluation of one node against the values computed so far.
struct Scope<'a> {
    values: &'a HashMap<&'a NodeId, Value>,
    node: &'a NodeId,
}

impl Scope<'_> {
    fn fail(&self, reason: impl Into<String>) -> PlatformError {
        PlatformError::computation(self.node.as_str(), reason)
    }

    fn model_error(&self, error: ModelError) -> PlatformError {
        self.fail(error.to_string())
    }

    fn get(&self, id: &NodeId) -> Result<&Value, PlatformError> {
        self.values
            .get(id)
            .ok_or_else(|| PlatformError::InvalidDocument(format!("unknown node '{id}'")))
    }

    fn date(&self, arg: &DateArg) -> Result<Date, PlatformError> {
        match arg {
            DateArg::Date(date) => Ok(*date),
            DateArg::Ref(id) => match self.get(id)? {
                Value::Date(date) | Value::Cell(Cell::Date(date)) => Ok(*date),
                other => Err(self.fail(format!("'{id}' is a {}, expected a date", other.kind()))),
            },
        }
    }

    fn model(&self, id: &NodeId) -> Result<&DiscountModel, PlatformError> {
        match self.get(id)? {
            Value::Model(model) => Ok(model),
            other => Err(self.fail(format!("'{id}' is a {}, expected a model", other.kind()))),
        }
    }

    fn product(&self, id: &NodeId) -> Result<&SingleCashflow, PlatformError> {
        match self.get(id)? {
            Value::Product(product) => Ok(product),
            other => Err(self.fail(format!("'{id}' is a {}, expected a product", other.kind()))),
        }
    }

    fn eval(&self, call: &Call) -> Result<Value, PlatformError> {
        match call {
            Call::MaturityDate {
                anchor,
                maturity,
                convention,
            } => {
                let convention: MaturityConvention = convention
                    .parse()
                    .map_err(|e| PlatformError::from_core(self.node.as_str(), e))?;
                convention
                    .resolve(*anchor, maturity)
                    .map(Value::Date)
                    .map_err(|e| PlatformError::from_core(self.node.as_str(), e))
            }

            Call::CreateSingleCashflowProduct {
                direction,
                notional,
                currency,
                payment_date,
            } => Ok(Value::Product(SingleCashflow::new(
                *direction,
                *notional,
                *currency,
                self.date(payment_date)?,
            ))),

            Call::AddSimpleDiscountCurveToModel {
                model,
                currency,
                anchor,
                rate,
            } => {
                let curve = FlatCurve::new(*anchor, *rate).map_err(|e| self.model_error(e))?;
                let base = match model {
                    Some(id) => self.model(id)?.clone(),
                    None => DiscountModel::new(),
                };
                Ok(Value::Model(base.with_curve(*currency, curve)))
            }

            Call::ValueProduct {
                model,
                product,
                specification,
                output,
            } => {
                if output != VALUE_OUTPUT {
                    return Err(self.fail(format!("unknown output measure '{output}'")));
                }
                let product = self.product(product)?;
                let pv = match specification {
                    ValuationSpecification::ClosedForm => {
                        closed_form_pv(self.model(model)?, product).map_err(|e| self.model_error(e))?
                    }
                };
                Ok(Value::Table(ResultTable::new(vec![vec![
                    Cell::from(product.currency.code()),
                    Cell::Number(pv),
                ]])))
            }

            Call::SubArray {
                source,
                row,
                column,
            } => {
                let table = self.get(source)?.clone().into_table(source.as_str());
                table
                    .get(*row, *column)
                    .cloned()
                    .map(Value::Cell)
                    .ok_or_else(|| {
                        self.fail(format!("({row}, {column}) is outside the value of '{source}'"))
                    })
            }
        }
    }
}
