//! The fixed allow-list of supported technical indicator functions.
//!
//! Requests are validated against this table before anything goes on the
//! wire; the upstream API answers unknown functions with an error body that
//! the parser can only classify as a key failure, so catching them here
//! keeps the error meaningful.

/// Supported indicator function names, lowercase.
pub const SUPPORTED: &[&str] = &[
    "sma", "ema", "wma", "dema", "tema", "trima", "t3", "kama", "mama", "vwap",
    "macd", "macdext", "stoch", "stochf", "rsi", "stochrsi", "willr", "adx",
    "adxr", "apo", "ppo", "mom", "bop", "cci", "cmo", "roc", "rocr", "aroon",
    "aroonosc", "mfi", "trix", "ultosc", "dx", "minus_di", "plus_di", "minus_dm",
    "plus_dm", "bbands", "midpoint", "midprice", "sar", "trange", "atr", "natr",
    "ad", "adosc", "obv", "ht_trendline", "htsine", "ht_trendmode", "ht_dcperiod",
    "ht_dcphase", "ht_phasor",
];

/// All supported indicator names.
pub fn all() -> &'static [&'static str] {
    SUPPORTED
}

/// Case-insensitive membership test.
pub fn is_supported(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    SUPPORTED.contains(&lower.as_str())
}
