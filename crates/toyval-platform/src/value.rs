//! Values held by evaluated nodes.

use toyval_core::Date;
use toyval_traits::{Cell, ResultTable};

use crate::curve::DiscountModel;
use crate::product::SingleCashflow;

/// The value of one evaluated node.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A resolved date.
    Date(Date),
    /// A product object.
    Product(SingleCashflow),
    /// A model object.
    Model(DiscountModel),
    /// A result table.
    Table(ResultTable),
    /// A single cell.
    Cell(Cell),
}

impl Value {
    /// Short type name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Date(_) => "date",
            Value::Product(_) => "product",
            Value::Model(_) => "model",
            Value::Table(_) => "table",
            Value::Cell(_) => "cell",
        }
    }

    /// Converts a root value into the table returned to the caller.
    ///
    /// Tables are returned as-is and scalars as 1×1 tables. Objects are
    /// returned by name, the way a Platform hands back object handles.
    pub fn into_table(self, name: &str) -> ResultTable {
        match self {
            Value::Table(table) => table,
            Value::Date(date) => ResultTable::scalar(date),
            Value::Cell(cell) => ResultTable::scalar(cell),
            Value::Product(_) | Value::Model(_) => ResultTable::scalar(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_table() {
        let date = Date::from_ymd(2025, 4, 15).unwrap();
        assert_eq!(
            Value::Date(date).into_table("MaturityDate_1"),
            ResultTable::scalar(date)
        );
        assert_eq!(
            Value::Model(DiscountModel::new()).into_table("Model_1"),
            ResultTable::scalar("Model_1")
        );
        assert_eq!(
            Value::Cell(Cell::Number(2.0)).into_table("SubArray_1"),
            ResultTable::scalar(2.0)
        );
    }
}
