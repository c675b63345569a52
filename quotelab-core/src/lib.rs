//! QuoteLab Core — response parsing and table normalization.
//!
//! This crate contains the heart of the quote API client:
//! - The `Table` data model (row/column labels over an untyped cell grid)
//! - The response parser, which classifies the two upstream failure shapes
//!   before any structural transformation happens
//! - The normalization step library: composable table-to-table transforms
//!   that the client assembles into per-request-kind chains
//! - Polars export for normalized tables
//!
//! The crate performs no I/O: it consumes already-fetched response bytes and
//! produces tables. Transport, credentials, and chain selection live in
//! `quotelab-client`.

pub mod frame;
pub mod normalize;
pub mod parse;
pub mod table;

pub use parse::{parse, ParseError};
pub use table::{Cell, Table};
