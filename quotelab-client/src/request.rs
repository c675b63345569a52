//! Typed request building for the query endpoint.
//!
//! Every request kind assembles its outgoing query pairs from a base set of
//! required fields plus an explicit [`ExtraParams`] map for the optional
//! parameters some upstream functions take. Extras never overwrite required
//! fields; a collision is rejected before anything goes on the wire.

use crate::indicators;
use std::collections::BTreeMap;
use thiserror::Error;

/// Request could not be assembled into a valid query.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("unknown indicator {name:?}; indicators::all() lists the supported set")]
    UnknownIndicator { name: String },

    #[error("extra parameter {key:?} collides with a required query field")]
    ReservedParameter { key: String },
}

/// Bar interval for time-series and indicator requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarSize {
    Min1,
    Min5,
    Min15,
    Min30,
    Min60,
    Day,
    Week,
    Month,
}

impl BarSize {
    /// The interval string indicator functions take.
    pub fn interval(&self) -> &'static str {
        match self {
            BarSize::Min1 => "1min",
            BarSize::Min5 => "5min",
            BarSize::Min15 => "15min",
            BarSize::Min30 => "30min",
            BarSize::Min60 => "60min",
            BarSize::Day => "daily",
            BarSize::Week => "weekly",
            BarSize::Month => "monthly",
        }
    }

    pub fn is_intraday(&self) -> bool {
        matches!(
            self,
            BarSize::Min1 | BarSize::Min5 | BarSize::Min15 | BarSize::Min30 | BarSize::Min60
        )
    }

    /// Suffix appended to `TIME_SERIES` to select the upstream function.
    fn series_suffix(&self) -> &'static str {
        match self {
            BarSize::Day => "_DAILY",
            BarSize::Week => "_WEEKLY",
            BarSize::Month => "_MONTHLY",
            _ => "_INTRADAY",
        }
    }
}

/// Price series an indicator is computed over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeriesType {
    Open,
    High,
    Low,
    #[default]
    Close,
}

impl SeriesType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesType::Open => "open",
            SeriesType::High => "high",
            SeriesType::Low => "low",
            SeriesType::Close => "close",
        }
    }
}

/// Optional string-keyed query parameters.
///
/// Some upstream functions take arguments beyond the common set (e.g. MACD's
/// fast/slow periods). They are carried explicitly here and merged into the
/// outgoing query only after checking that no key shadows a required field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtraParams {
    params: BTreeMap<String, String>,
}

impl ExtraParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, chainable.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    fn append_to(&self, pairs: &mut Vec<(String, String)>) -> Result<(), RequestError> {
        for key in self.params.keys() {
            if pairs.iter().any(|(k, _)| k == key) {
                return Err(RequestError::ReservedParameter { key: key.clone() });
            }
        }
        for (key, value) in &self.params {
            pairs.push((key.clone(), value.clone()));
        }
        Ok(())
    }
}

fn pair(key: &str, value: impl Into<String>) -> (String, String) {
    (key.to_string(), value.into())
}

/// A GLOBAL_QUOTE request.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub symbol: String,
    pub extra: ExtraParams,
}

impl QuoteRequest {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            extra: ExtraParams::new(),
        }
    }

    /// Outgoing query pairs for this request.
    pub fn params(&self, api_key: &str) -> Result<Vec<(String, String)>, RequestError> {
        let mut pairs = vec![
            pair("function", "GLOBAL_QUOTE"),
            pair("symbol", self.symbol.clone()),
            pair("apikey", api_key),
        ];
        self.extra.append_to(&mut pairs)?;
        Ok(pairs)
    }
}

/// A TIME_SERIES request.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRequest {
    pub symbol: String,
    pub barsize: BarSize,
    /// Request the `_ADJUSTED` variant (includes the adjusted close).
    pub adjusted: bool,
    pub extra: ExtraParams,
}

impl SeriesRequest {
    pub fn new(symbol: impl Into<String>, barsize: BarSize) -> Self {
        Self {
            symbol: symbol.into(),
            barsize,
            adjusted: false,
            extra: ExtraParams::new(),
        }
    }

    pub fn adjusted(mut self) -> Self {
        self.adjusted = true;
        self
    }

    /// Outgoing query pairs for this request. Intraday bar sizes add the
    /// `interval` parameter; daily/weekly/monthly select it via the function
    /// name instead.
    pub fn params(&self, api_key: &str) -> Result<Vec<(String, String)>, RequestError> {
        let mut function = format!("TIME_SERIES{}", self.barsize.series_suffix());
        if self.adjusted {
            function.push_str("_ADJUSTED");
        }
        let mut pairs = vec![pair("function", function), pair("symbol", self.symbol.clone())];
        if self.barsize.is_intraday() {
            pairs.push(pair("interval", self.barsize.interval()));
        }
        pairs.push(pair("apikey", api_key));
        self.extra.append_to(&mut pairs)?;
        Ok(pairs)
    }
}

/// A technical indicator request.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorRequest {
    /// Indicator function name; validated against [`indicators::all`].
    pub indicator: String,
    pub symbol: String,
    pub barsize: BarSize,
    /// Price series the indicator is computed over.
    pub series_type: SeriesType,
    /// Rolling window length in bars.
    pub time_period: u32,
    pub extra: ExtraParams,
}

impl IndicatorRequest {
    pub fn new(indicator: impl Into<String>, symbol: impl Into<String>, barsize: BarSize) -> Self {
        Self {
            indicator: indicator.into(),
            symbol: symbol.into(),
            barsize,
            series_type: SeriesType::default(),
            time_period: 10,
            extra: ExtraParams::new(),
        }
    }

    /// Outgoing query pairs for this request. Rejects indicators outside the
    /// allow-list before anything is sent.
    pub fn params(&self, api_key: &str) -> Result<Vec<(String, String)>, RequestError> {
        if !indicators::is_supported(&self.indicator) {
            return Err(RequestError::UnknownIndicator {
                name: self.indicator.clone(),
            });
        }
        let mut pairs = vec![
            pair("function", self.indicator.clone()),
            pair("symbol", self.symbol.clone()),
            pair("interval", self.barsize.interval()),
            pair("series_type", self.series_type.as_str()),
            pair("time_period", self.time_period.to_string()),
            pair("apikey", api_key),
        ];
        self.extra.append_to(&mut pairs)?;
        Ok(pairs)
    }
}
