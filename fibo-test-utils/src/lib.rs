//! Deterministic candle fixtures used across the Fibo test suites.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use fibo_core::{Candle, CandleSeries};

/// Timestamp of the first fixture bar (2024-01-01, daily bars).
pub fn base_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid base timestamp")
}

/// Builds one daily candle per close, with a symmetric one-unit high/low range.
pub fn candles_from_closes(closes: &[Decimal]) -> Vec<Candle> {
    let base = base_timestamp();
    closes
        .iter()
        .enumerate()
        .map(|(idx, close)| Candle {
            timestamp: base + Duration::days(idx as i64),
            open: *close,
            high: *close + Decimal::ONE,
            low: *close - Decimal::ONE,
            close: *close,
            volume: Decimal::new(1_000 + idx as i64, 0),
        })
        .collect()
}

/// Validated series built from [`candles_from_closes`].
pub fn series_from_closes(closes: &[Decimal]) -> CandleSeries {
    CandleSeries::new(candles_from_closes(closes)).expect("fixture candles are valid")
}

/// Closes `start, start + 1, ..., start + count - 1`.
pub fn rising_closes(start: i64, count: usize) -> Vec<Decimal> {
    (0..count as i64).map(|idx| Decimal::from(start + idx)).collect()
}

/// Closes `start, start - 1, ..., start - count + 1`.
pub fn falling_closes(start: i64, count: usize) -> Vec<Decimal> {
    (0..count as i64).map(|idx| Decimal::from(start - idx)).collect()
}

pub fn constant_closes(value: Decimal, count: usize) -> Vec<Decimal> {
    vec![value; count]
}

/// A deterministic zig-zag price path with alternating up and down swings.
pub fn sample_series(count: usize) -> CandleSeries {
    let base = base_timestamp();
    let candles = (0..count as i64)
        .map(|idx| {
            let swing = Decimal::from((idx * 7) % 11) - Decimal::from(5);
            let trend = Decimal::new(idx * 25, 2);
            let close = Decimal::from(100) + trend + swing;
            let open = close - Decimal::new(((idx % 3) - 1) * 50, 2);
            Candle {
                timestamp: base + Duration::days(idx),
                open,
                high: close.max(open) + Decimal::new(75, 2),
                low: close.min(open) - Decimal::new(60, 2),
                close,
                volume: Decimal::from(1_000_000 + (idx % 5) * 250_000),
            }
        })
        .collect();
    CandleSeries::new(candles).expect("fixture candles are valid")
}
