//! End-to-end chain tests from raw JSON payloads.
//!
//! Exercises the three documented chains the client composes:
//! - Quote:      parse → clean_rows → first_row_as_header
//! - TimeSeries: parse → unpack_series → clear_nan → clean_columns
//! - Indicator:  parse → unpack_series → clear_nan

use quotelab_core::normalize::{
    clean_columns, clean_rows, clear_nan, first_row_as_header, period_columns, unpack_series,
};
use quotelab_core::{parse, Cell, ParseError};

// ── Quote chain ──────────────────────────────────────────────────────

const QUOTE_BODY: &[u8] = br#"{
    "Global Quote": {
        "01. symbol": "MSFT",
        "02. open": "309.00",
        "03. high": "312.20",
        "04. low": "308.10",
        "05. price": "310.50",
        "06. volume": "21085700",
        "07. latest trading day": "2023-01-06"
    }
}"#;

#[test]
fn quote_chain_strips_ordinals_and_promotes_header() {
    let table = parse(QUOTE_BODY).unwrap();
    let table = clean_rows(table).unwrap();
    assert_eq!(
        table.index(),
        ["symbol", "open", "high", "low", "price", "volume", "latest"]
    );

    let table = first_row_as_header(table);
    // Row 0 ("symbol" → "MSFT") became the header; the window keeps the
    // next five rows, so "latest" falls off the end.
    assert_eq!(table.columns(), ["MSFT"]);
    assert_eq!(table.index(), ["open", "high", "low", "price", "volume"]);
    assert_eq!(table.get("price", "MSFT"), Some(&Cell::Number(310.50)));
    assert_eq!(table.get("volume", "MSFT"), Some(&Cell::Number(21085700.0)));
}

// ── TimeSeries chain ─────────────────────────────────────────────────

const SERIES_BODY: &[u8] = br#"{
    "Meta Data": {
        "1. Information": "Daily Prices (open, high, low, close) and Volumes",
        "2. Symbol": "GE"
    },
    "Time Series (Daily)": {
        "2023-01-01": {"1. open": "100", "4. close": "101"},
        "2023-01-02": {"1. open": "102", "4. close": "103"}
    }
}"#;

#[test]
fn timeseries_chain_yields_numeric_columns() {
    let table = parse(SERIES_BODY).unwrap();
    let table = unpack_series(table);
    assert_eq!(table.columns(), ["1. open", "4. close"]);

    let table = clear_nan(table);
    // The two Meta Data rows carried no series record and are gone.
    assert_eq!(table.index(), ["2023-01-01", "2023-01-02"]);

    let table = clean_columns(table).unwrap();
    assert_eq!(table.columns(), ["open", "close"]);
    assert_eq!(table.get("2023-01-01", "open"), Some(&Cell::Number(100.0)));
    assert_eq!(table.get("2023-01-02", "close"), Some(&Cell::Number(103.0)));
}

#[test]
fn timeseries_chain_survives_partial_days() {
    // A day missing one metric keeps its row; only fully-empty rows drop.
    let body = br#"{
        "Meta Data": {"1. Information": "Daily Prices"},
        "Time Series (Daily)": {
            "2023-01-01": {"1. open": "100", "4. close": "101"},
            "2023-01-02": {"4. close": "103"}
        }
    }"#;
    let table = clean_columns(clear_nan(unpack_series(parse(body).unwrap()))).unwrap();
    assert_eq!(table.index(), ["2023-01-01", "2023-01-02"]);
    assert_eq!(table.get("2023-01-02", "open"), Some(&Cell::Missing));
    assert_eq!(table.get("2023-01-02", "close"), Some(&Cell::Number(103.0)));
}

// ── Indicator chain ──────────────────────────────────────────────────

const INDICATOR_BODY: &[u8] = br#"{
    "Meta Data": {
        "1: Symbol": "AMZN",
        "2: Indicator": "Exponential Moving Average (EMA)"
    },
    "Technical Analysis: EMA": {
        "2023-01-05": {"EMA": "153.0700"},
        "2023-01-06": {"EMA": "154.2100"}
    }
}"#;

#[test]
fn indicator_chain_keeps_upstream_values() {
    let table = clear_nan(unpack_series(parse(INDICATOR_BODY).unwrap()));
    assert_eq!(table.index(), ["2023-01-05", "2023-01-06"]);
    assert_eq!(table.columns(), ["EMA"]);
    // No casting step in this chain: values stay as upstream text.
    assert_eq!(
        table.get("2023-01-05", "EMA"),
        Some(&Cell::Text("153.0700".into()))
    );
}

#[test]
fn period_columns_disambiguates_merged_indicators() {
    let table = clear_nan(unpack_series(parse(INDICATOR_BODY).unwrap()));
    let table = period_columns(table, 12);
    assert_eq!(table.columns(), ["EMA12"]);
    assert_eq!(table.get("2023-01-06", "EMA12"), Some(&Cell::Number(154.21)));
}

// ── Parser classification ────────────────────────────────────────────

#[test]
fn error_body_reads_as_key_not_found() {
    let body = br#"{"Error Message": "Invalid API call. Please retry or visit the documentation."}"#;
    assert!(matches!(parse(body), Err(ParseError::KeyNotFound)));
}

#[test]
fn empty_series_reads_as_symbol_not_found() {
    assert!(matches!(
        parse(br#"{"Time Series (Daily)": {}}"#),
        Err(ParseError::SymbolNotFound)
    ));
}

#[test]
fn normalized_series_exports_to_polars() {
    let table = clean_columns(clear_nan(unpack_series(parse(SERIES_BODY).unwrap()))).unwrap();
    let df = table.to_frame().unwrap();
    assert_eq!(df.shape(), (2, 3));
    assert_eq!(
        df.get_column_names()
            .iter()
            .map(|name| name.as_str())
            .collect::<Vec<_>>(),
        ["index", "open", "close"]
    );
}
