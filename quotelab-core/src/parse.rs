//! Response parsing: raw API bytes into an initial table.
//!
//! The upstream API signals failures through the response shape rather than
//! HTTP status: a rejected API key and any other error body arrive as a JSON
//! object without the tabular envelope, and an unknown symbol arrives as a
//! valid envelope with no rows. The parser's only job is to separate those
//! two failure classes from the success path; all further shaping belongs to
//! the normalization steps.

use crate::table::{Cell, Table};
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;

/// Classified failures raised at the response boundary.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body was not a tabular JSON envelope. The upstream API uses the
    /// same shape for rejected keys and for other error bodies, so the two
    /// causes are indistinguishable here — downstream must not assume a
    /// finer diagnosis.
    #[error("response is not a tabular JSON envelope (invalid or rejected API key)")]
    KeyNotFound,

    /// The envelope parsed but held no rows: the symbol does not exist
    /// upstream.
    #[error("empty response envelope: symbol not found")]
    SymbolNotFound,
}

/// Parse response bytes into the initial table.
///
/// Top-level keys become columns in document order. Each object-valued entry
/// contributes its nested keys to the row index (first-seen order, unioned
/// across columns); a scalar-valued entry broadcasts down its column. A cell
/// whose row is absent from its column's record is `Missing`.
pub fn parse(raw: &[u8]) -> Result<Table, ParseError> {
    let doc: Value = serde_json::from_slice(raw).map_err(|_| ParseError::KeyNotFound)?;
    let Value::Object(envelope) = doc else {
        return Err(ParseError::KeyNotFound);
    };

    // An object with only scalar values cannot map onto a 2-D shape; the
    // upstream error bodies ({"Error Message": "..."}) have exactly this form.
    if !envelope.is_empty() && !envelope.values().any(Value::is_object) {
        return Err(ParseError::KeyNotFound);
    }

    let columns: Vec<String> = envelope.keys().cloned().collect();

    let mut index: Vec<String> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for value in envelope.values() {
        if let Value::Object(record) = value {
            for key in record.keys() {
                if seen.insert(key) {
                    index.push(key.clone());
                }
            }
        }
    }

    if index.is_empty() {
        return Err(ParseError::SymbolNotFound);
    }

    let cells: Vec<Vec<Cell>> = index
        .iter()
        .map(|row| {
            envelope
                .values()
                .map(|value| match value {
                    Value::Object(record) => record
                        .get(row)
                        .cloned()
                        .map(Cell::from_json)
                        .unwrap_or(Cell::Missing),
                    scalar => Cell::from_json(scalar.clone()),
                })
                .collect()
        })
        .collect();

    Ok(Table::new(index, columns, cells))
}
