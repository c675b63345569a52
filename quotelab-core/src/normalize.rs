//! Normalization steps: composable, stateless table-to-table transforms.
//!
//! Each step fixes exactly one structural artifact of the upstream envelope
//! and knows nothing about the others; the client composes them into the
//! per-request-kind chains. A step is a no-op on tables that lack the shape
//! it targets, with one documented exception: the label-stripping steps
//! require every label to carry an ordinal prefix and surface a
//! `MalformedLabel` error when one does not.

use crate::table::{Cell, Table};
use thiserror::Error;

/// Violated precondition of a label-stripping step.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The label did not follow the upstream `"<ordinal> <name>"` convention.
    #[error("label {label:?} has no token after its ordinal prefix")]
    MalformedLabel { label: String },
}

/// Data rows kept below the promoted header in [`first_row_as_header`].
const HEADER_WINDOW_ROWS: usize = 5;

/// Expand the second column's nested records into one column per nested key.
///
/// The upstream series envelope puts metadata in the first column and the
/// actual date-indexed payload in the second. Rows keep their labels; the
/// new columns are the union of nested keys in first-seen order. A row whose
/// cell is not a record becomes all-missing (metadata rows — `clear_nan`
/// removes them next). Tables with fewer than two columns pass through.
pub fn unpack_series(table: Table) -> Table {
    if table.n_cols() < 2 {
        return table;
    }
    let (index, _, rows) = table.into_parts();
    let series_cells: Vec<Cell> = rows.into_iter().map(|mut row| row.swap_remove(1)).collect();

    // Union of nested keys; record key sets are small, so a linear scan does.
    let mut columns: Vec<String> = Vec::new();
    for cell in &series_cells {
        if let Cell::Record(record) = cell {
            for key in record.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
    }

    let cells: Vec<Vec<Cell>> = series_cells
        .into_iter()
        .map(|cell| match cell {
            Cell::Record(record) => columns
                .iter()
                .map(|col| {
                    record
                        .get(col)
                        .cloned()
                        .map(Cell::from_json)
                        .unwrap_or(Cell::Missing)
                })
                .collect(),
            _ => vec![Cell::Missing; columns.len()],
        })
        .collect();

    Table::new(index, columns, cells)
}

/// Drop every all-missing column, then every all-missing row.
///
/// Partially-filled rows and columns are never touched. Idempotent: a row
/// removed here is missing in every column, so removing it cannot create a
/// newly all-missing column.
pub fn clear_nan(table: Table) -> Table {
    let (index, columns, cells) = table.into_parts();

    let keep_col: Vec<bool> = (0..columns.len())
        .map(|c| cells.iter().any(|row| !row[c].is_missing()))
        .collect();
    let columns: Vec<String> = columns
        .into_iter()
        .zip(&keep_col)
        .filter_map(|(col, &keep)| keep.then_some(col))
        .collect();
    let cells: Vec<Vec<Cell>> = cells
        .into_iter()
        .map(|row| {
            row.into_iter()
                .zip(&keep_col)
                .filter_map(|(cell, &keep)| keep.then_some(cell))
                .collect()
        })
        .collect();

    let keep_row: Vec<bool> = cells
        .iter()
        .map(|row| row.iter().any(|cell| !cell.is_missing()))
        .collect();
    let index: Vec<String> = index
        .into_iter()
        .zip(&keep_row)
        .filter_map(|(label, &keep)| keep.then_some(label))
        .collect();
    let cells: Vec<Vec<Cell>> = cells
        .into_iter()
        .zip(&keep_row)
        .filter_map(|(row, &keep)| keep.then_some(row))
        .collect();

    Table::new(index, columns, cells)
}

/// Strip the ordinal prefix from every row label (`"05. price"` → `"price"`).
///
/// Label-only: shape and cells are untouched, order preserved.
pub fn clean_rows(table: Table) -> Result<Table, NormalizeError> {
    let (index, columns, cells) = table.into_parts();
    let index = index
        .into_iter()
        .map(strip_ordinal)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Table::new(index, columns, cells))
}

/// Strip the ordinal prefix from every column label and cast cells to f32.
pub fn clean_columns(table: Table) -> Result<Table, NormalizeError> {
    let (index, columns, cells) = table.into_parts();
    let columns = columns
        .into_iter()
        .map(strip_ordinal)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Table::new(index, columns, cast_numeric(cells)))
}

/// Promote row 0's values to column labels and keep the next five data rows,
/// cast to f32.
///
/// The five-row window is a hard-coded preview; callers needing the full
/// body use [`first_row_as_header_with`].
pub fn first_row_as_header(table: Table) -> Table {
    first_row_as_header_with(table, HEADER_WINDOW_ROWS)
}

/// [`first_row_as_header`] with an explicit number of data rows to keep.
pub fn first_row_as_header_with(table: Table, keep_rows: usize) -> Table {
    if table.n_rows() == 0 {
        return table;
    }
    let (index, _, mut rows) = table.into_parts();
    let header = rows.remove(0);
    let columns: Vec<String> = header.iter().map(Cell::label).collect();
    rows.truncate(keep_rows);
    let index: Vec<String> = index.into_iter().skip(1).take(keep_rows).collect();
    Table::new(index, columns, cast_numeric(rows))
}

/// Append the period to every column label and cast cells to f32.
///
/// Disambiguates tables computed with different rolling-window lengths
/// before a caller merges them. Not part of any fixed chain.
pub fn period_columns(table: Table, period: u32) -> Table {
    let (index, columns, cells) = table.into_parts();
    let columns = columns
        .into_iter()
        .map(|col| format!("{col}{period}"))
        .collect();
    Table::new(index, columns, cast_numeric(cells))
}

fn strip_ordinal(label: String) -> Result<String, NormalizeError> {
    match label.split(' ').nth(1).map(str::to_owned) {
        Some(name) => Ok(name),
        None => Err(NormalizeError::MalformedLabel { label }),
    }
}

/// Coerce every cell to `Number`, or `Missing` where no numeric view exists.
/// The steps may not raise domain errors, so an unparseable cell degrades to
/// the missing marker rather than failing the chain.
fn cast_numeric(rows: Vec<Vec<Cell>>) -> Vec<Vec<Cell>> {
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| match cell.as_f32() {
                    Some(v) => Cell::Number(v),
                    None => Cell::Missing,
                })
                .collect()
        })
        .collect()
}
