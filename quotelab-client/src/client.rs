//! The query client: one GET per accessor, then the fixed normalization
//! chain for that request kind.
//!
//! The client performs no retries and keeps no cross-request state; every
//! call is an independent fetch-and-normalize cycle. Rate limiting and
//! caching, if wanted, belong to a layer above.

use crate::config::ClientConfig;
use crate::request::{IndicatorRequest, QuoteRequest, RequestError, SeriesRequest};
use quotelab_core::normalize::{self, NormalizeError};
use quotelab_core::{parse, ParseError, Table};
use std::time::Duration;
use thiserror::Error;

/// Fixed query endpoint; every request kind is a parameter set against it.
const QUERY_URL: &str = "https://www.alphavantage.co/query";

/// Failures surfaced by the client accessors.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// Blocking client over the query endpoint.
pub struct QuoteClient {
    http: reqwest::blocking::Client,
    config: ClientConfig,
}

impl QuoteClient {
    pub fn new(config: ClientConfig) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build HTTP client");
        Self { http, config }
    }

    /// Fetch a GLOBAL_QUOTE and run the quote chain: the ordinal prefixes
    /// come off the row labels, then the symbol row becomes the header.
    pub fn get_quote(&self, request: &QuoteRequest) -> Result<Table, QueryError> {
        let table = self.fetch(request.params(&self.config.api_key)?)?;
        let table = normalize::clean_rows(table)?;
        Ok(normalize::first_row_as_header(table))
    }

    /// Fetch a TIME_SERIES and run the series chain: unpack the date-indexed
    /// payload, drop the metadata residue, strip ordinals and cast.
    pub fn get_timeseries(&self, request: &SeriesRequest) -> Result<Table, QueryError> {
        let table = self.fetch(request.params(&self.config.api_key)?)?;
        let table = normalize::clear_nan(normalize::unpack_series(table));
        Ok(normalize::clean_columns(table)?)
    }

    /// Fetch a technical indicator and run the indicator chain. Values stay
    /// as upstream text; apply `normalize::period_columns` before merging
    /// tables computed with different window lengths.
    pub fn get_indicator(&self, request: &IndicatorRequest) -> Result<Table, QueryError> {
        let table = self.fetch(request.params(&self.config.api_key)?)?;
        Ok(normalize::clear_nan(normalize::unpack_series(table)))
    }

    fn fetch(&self, params: Vec<(String, String)>) -> Result<Table, QueryError> {
        let response = self
            .http
            .get(QUERY_URL)
            .query(&params)
            .send()?
            .error_for_status()?;
        let raw = response.bytes()?;
        Ok(parse(&raw)?)
    }
}
