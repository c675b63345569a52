//! Criterion benchmarks for the normalization hot path.
//!
//! Benchmarks:
//! 1. Response parsing (bytes → initial table)
//! 2. The full time-series chain (parse → unpack → clear → clean)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quotelab_core::normalize::{clean_columns, clear_nan, unpack_series};
use quotelab_core::parse;

// ── Helpers ──────────────────────────────────────────────────────────

/// A daily series payload with `days` rows, shaped like the upstream API.
fn series_payload(days: usize) -> Vec<u8> {
    let mut body = String::from(
        r#"{"Meta Data": {"1. Information": "Daily Prices", "2. Symbol": "SPY"}, "Time Series (Daily)": {"#,
    );
    for day in 0..days {
        if day > 0 {
            body.push(',');
        }
        let price = 400.0 + (day % 50) as f64 * 0.25;
        body.push_str(&format!(
            r#""2023-{:02}-{:02}": {{"1. open": "{price:.2}", "2. high": "{:.2}", "3. low": "{:.2}", "4. close": "{:.2}", "5. volume": "{}"}}"#,
            day / 28 + 1,
            day % 28 + 1,
            price + 1.5,
            price - 1.5,
            price + 0.4,
            1_000_000 + day * 137,
        ));
    }
    body.push_str("}}");
    body.into_bytes()
}

// ── Benchmarks ───────────────────────────────────────────────────────

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for days in [100, 500] {
        let raw = series_payload(days);
        group.bench_with_input(BenchmarkId::from_parameter(days), &raw, |b, raw| {
            b.iter(|| parse(black_box(raw)).unwrap());
        });
    }
    group.finish();
}

fn bench_series_chain(c: &mut Criterion) {
    let raw = series_payload(500);
    c.bench_function("series_chain_500_days", |b| {
        b.iter(|| {
            let table = parse(black_box(&raw)).unwrap();
            clean_columns(clear_nan(unpack_series(table))).unwrap()
        });
    });
}

criterion_group!(benches, bench_parse, bench_series_chain);
criterion_main!(benches);
