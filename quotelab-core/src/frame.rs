//! Polars export for normalized tables.
//!
//! A fully normalized table is homogeneously numeric, but the indicator
//! chain stops before any casting step, so the export decides per column:
//! all-numeric columns become `Float32` with nulls for the missing marker,
//! anything else becomes a string column.

use crate::table::{Cell, Table};
use polars::prelude::*;

/// Name of the DataFrame column holding the table's row labels.
pub const INDEX_COLUMN: &str = "index";

impl Table {
    /// Export the table as a polars `DataFrame`.
    ///
    /// The row labels become a string column named [`INDEX_COLUMN`], followed
    /// by one column per table column in order. Fails if column labels
    /// collide (polars requires unique names).
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let mut out: Vec<Column> = Vec::with_capacity(self.n_cols() + 1);
        out.push(Column::new(INDEX_COLUMN.into(), self.index().to_vec()));

        for (c, name) in self.columns().iter().enumerate() {
            let cells: Vec<&Cell> = (0..self.n_rows()).map(|r| self.cell(r, c)).collect();
            let numeric = cells
                .iter()
                .all(|cell| matches!(cell, Cell::Missing | Cell::Number(_)));

            let column = if numeric {
                let values: Vec<Option<f32>> = cells.iter().map(|cell| cell.as_f32()).collect();
                Column::new(name.as_str().into(), values)
            } else {
                let values: Vec<Option<String>> = cells
                    .iter()
                    .map(|cell| match cell {
                        Cell::Missing => None,
                        other => Some(other.label()),
                    })
                    .collect();
                Column::new(name.as_str().into(), values)
            };
            out.push(column);
        }

        DataFrame::new(out)
    }
}
