//! The Table data model: ordered row/column labels over a rectangular cell grid.
//!
//! A `Table` starts out untyped — cells hold whatever the upstream envelope
//! held (numeric-looking strings, numbers, nested records) — and ends up
//! homogeneously numeric after a normalization chain has run. `Cell::Missing`
//! is the sentinel for an absent value and is distinct from zero.

use serde_json::Value;

/// One cell of a table.
///
/// `Record` holds a nested JSON object (the upstream date→metric or
/// metric→value mapping) in document order; `unpack_series` expands these
/// into columns. After a casting step only `Number` and `Missing` remain.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Missing,
    Number(f32),
    Text(String),
    Record(serde_json::Map<String, Value>),
}

impl Cell {
    /// Convert a deserialized JSON value into a cell.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => Cell::Missing,
            Value::Number(n) => Cell::Number(n.as_f64().unwrap_or(f64::NAN) as f32),
            Value::String(s) => Cell::Text(s),
            Value::Object(record) => Cell::Record(record),
            // The upstream envelope never nests arrays or booleans inside a
            // tabular cell; keep their JSON rendering rather than lose them.
            other => Cell::Text(other.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Numeric view of the cell: numbers pass through, numeric text parses,
    /// everything else is absent.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Text(s) => s.trim().parse::<f32>().ok(),
            _ => None,
        }
    }

    /// Render the cell as a label, used when a row is promoted to a header.
    pub fn label(&self) -> String {
        match self {
            Cell::Missing => String::new(),
            Cell::Number(v) => v.to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Record(record) => Value::Object(record.clone()).to_string(),
        }
    }
}

/// Rectangular structure of row labels, column labels, and cells.
///
/// Built fresh per response, threaded by value through a normalization
/// chain, and discarded after being handed to the caller. Construction
/// enforces rectangularity; labels are not required to be unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    index: Vec<String>,
    columns: Vec<String>,
    cells: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table from its parts. Panics if `cells` is not rectangular
    /// with `index.len()` rows and `columns.len()` columns — that is a
    /// programmer error, not a runtime condition.
    pub fn new(index: Vec<String>, columns: Vec<String>, cells: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells.len(), index.len(), "row count must match index length");
        for row in &cells {
            assert_eq!(row.len(), columns.len(), "every row must match column count");
        }
        Self { index, columns, cells }
    }

    pub fn n_rows(&self) -> usize {
        self.index.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn index(&self) -> &[String] {
        &self.index
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Positional cell access. Panics out of bounds, like slice indexing.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row][col]
    }

    /// Label-addressed cell access; first match wins if labels repeat.
    pub fn get(&self, row_label: &str, col_label: &str) -> Option<&Cell> {
        let row = self.index.iter().position(|r| r == row_label)?;
        let col = self.columns.iter().position(|c| c == col_label)?;
        Some(&self.cells[row][col])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Decompose into `(index, columns, cells)` for rebuilding transforms.
    pub fn into_parts(self) -> (Vec<String>, Vec<String>, Vec<Vec<Cell>>) {
        (self.index, self.columns, self.cells)
    }
}
