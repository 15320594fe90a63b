//! Nested result tables returned by an evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

use toyval_core::Date;

/// One cell of a [`ResultTable`].
///
/// Untagged on the wire, so a table reads as plain JSON: `[["USD", 997549.5]]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// Missing value (`null`).
    Empty,
    /// Numeric value.
    Number(f64),
    /// ISO date.
    Date(Date),
    /// Any other text.
    Text(String),
}

impl Cell {
    /// Returns the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the date, if this is a date.
    pub fn as_date(&self) -> Option<Date> {
        match self {
            Cell::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the text, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Short type name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Cell::Empty => "empty",
            Cell::Number(_) => "number",
            Cell::Date(_) => "date",
            Cell::Text(_) => "text",
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Date(d) => write!(f, "{d}"),
            Cell::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<Date> for Cell {
    fn from(d: Date) -> Self {
        Cell::Date(d)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

/// A sequence of rows of cells. Rows need not share a length.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultTable(pub Vec<Vec<Cell>>);

impl ResultTable {
    /// Creates a table from rows.
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self(rows)
    }

    /// A 1×1 table.
    pub fn scalar(cell: impl Into<Cell>) -> Self {
        Self(vec![vec![cell.into()]])
    }

    /// Cell at `(row, column)`, if present.
    pub fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        self.0.get(row)?.get(column)
    }

    /// The rows.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.0
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Vec<Cell>>> for ResultTable {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Self(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_json() {
        let table: ResultTable = serde_json::from_str(r#"[["USD", 42.5]]"#).unwrap();
        assert_eq!(table.get(0, 0), Some(&Cell::Text("USD".into())));
        assert_eq!(table.get(0, 1).and_then(Cell::as_number), Some(42.5));
        assert_eq!(table.get(0, 2), None);
        assert_eq!(table.get(1, 0), None);
    }

    #[test]
    fn test_cell_kinds() {
        let table: ResultTable =
            serde_json::from_str(r#"[["2025-04-15", null, 1]]"#).unwrap();
        assert_eq!(
            table.get(0, 0).and_then(Cell::as_date),
            Date::from_ymd(2025, 4, 15).ok()
        );
        assert_eq!(table.get(0, 1), Some(&Cell::Empty));
        assert_eq!(table.get(0, 2).and_then(Cell::as_number), Some(1.0));
    }

    #[test]
    fn test_serialize_is_untagged() {
        let table = ResultTable::new(vec![vec!["USD".into(), 997_549.5.into()]]);
        assert_eq!(serde_json::to_string(&table).unwrap(), r#"[["USD",997549.5]]"#);
    }

    #[test]
    fn test_ragged_rows() {
        let table: ResultTable = serde_json::from_str(r#"[[1], [2, 3]]"#).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0, 1), None);
        assert_eq!(table.get(1, 1).and_then(Cell::as_number), Some(3.0));
    }
}
