//! QuoteLab Client — the glue around the normalization core.
//!
//! This crate owns everything `quotelab-core` treats as an external
//! collaborator:
//! - Explicit client configuration (API key, timeout), loadable from TOML
//! - The supported-indicator allow-list
//! - Typed request building (bar sizes, series types, extra parameters)
//! - HTTP transport and the three per-request-kind normalization chains

pub mod client;
pub mod config;
pub mod indicators;
pub mod request;

pub use client::{QueryError, QuoteClient};
pub use config::{ClientConfig, ConfigError};
pub use request::{
    BarSize, ExtraParams, IndicatorRequest, QuoteRequest, RequestError, SeriesRequest, SeriesType,
};
