//! Whole-series indicator functions.
//!
//! Each function takes the validated candle series plus its configuration
//! explicitly and returns series aligned index-for-index with the input.
//! A window longer than the series is not an error: the affected series is
//! simply undefined everywhere.

use fibo_core::{Candle, CandleSeries};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use crate::core::{Indicator, IndicatorError};
use crate::indicators::{BollingerBands, FibonacciLevels, Macd, Rsi, Sma};
use crate::series::Series;

/// Middle, upper and lower Bollinger bands aligned with the input.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BollingerSeries {
    /// Rolling mean of the close.
    pub middle: Series,
    /// Middle band plus `multiplier` sample deviations.
    pub upper: Series,
    /// Middle band minus `multiplier` sample deviations.
    pub lower: Series,
}

/// MACD line, signal line and histogram, defined at every position.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MacdSeries {
    /// Fast EMA minus slow EMA.
    pub macd: Vec<Decimal>,
    /// EMA of the MACD line.
    pub signal: Vec<Decimal>,
    /// MACD line minus signal line.
    pub histogram: Vec<Decimal>,
}

/// Rolling mean of the close over `period` bars.
pub fn sma(series: &CandleSeries, period: usize) -> Result<Series, IndicatorError> {
    let mut indicator = Sma::<&Candle>::new(period)?;
    warn_if_short("SMA", period, series.len());
    Ok(indicator.batch(series))
}

/// Bollinger bands over `window` bars with a `multiplier` band width.
pub fn bollinger_bands(
    series: &CandleSeries,
    window: usize,
    multiplier: Decimal,
) -> Result<BollingerSeries, IndicatorError> {
    let mut indicator = BollingerBands::<&Candle>::new(window, multiplier)?;
    warn_if_short("BollingerBands", window, series.len());

    let mut output = BollingerSeries {
        middle: Vec::with_capacity(series.len()),
        upper: Vec::with_capacity(series.len()),
        lower: Vec::with_capacity(series.len()),
    };
    for bands in indicator.batch(series) {
        output.middle.push(bands.map(|b| b.middle));
        output.upper.push(bands.map(|b| b.upper));
        output.lower.push(bands.map(|b| b.lower));
    }
    Ok(output)
}

/// MACD with the given fast, slow and signal spans.
pub fn macd(
    series: &CandleSeries,
    fast: usize,
    slow: usize,
    signal: usize,
) -> Result<MacdSeries, IndicatorError> {
    let mut indicator = Macd::<&Candle>::new(fast, slow, signal)?;

    let mut output = MacdSeries {
        macd: Vec::with_capacity(series.len()),
        signal: Vec::with_capacity(series.len()),
        histogram: Vec::with_capacity(series.len()),
    };
    for value in indicator.batch(series).into_iter().flatten() {
        output.macd.push(value.macd);
        output.signal.push(value.signal);
        output.histogram.push(value.histogram);
    }
    debug_assert_eq!(output.macd.len(), series.len());
    Ok(output)
}

/// RSI over `period` price changes; undefined for the first `period` bars.
pub fn rsi(series: &CandleSeries, period: usize) -> Result<Series, IndicatorError> {
    let mut indicator = Rsi::<&Candle>::new(period)?;
    warn_if_short("RSI", period + 1, series.len());
    Ok(indicator.batch(series))
}

/// Retracement levels from the global high and low of the series.
pub fn fibonacci_levels(series: &CandleSeries) -> FibonacciLevels {
    FibonacciLevels::from_series(series)
}

fn warn_if_short(indicator: &'static str, required: usize, available: usize) {
    if required > available {
        warn!(
            indicator,
            required,
            available,
            "series is shorter than the indicator window; output is undefined everywhere"
        );
    }
}
