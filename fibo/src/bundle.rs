//! Output consumed by the chart renderer.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use fibo_config::ReferenceLines;
use fibo_core::{BarDirection, Candle, CandleSeries, Price};
use fibo_indicators::indicators::FibonacciLevels;
use fibo_indicators::{BollingerSeries, MacdSeries, Series};
use rust_decimal::Decimal;
use serde::Serialize;

/// Every derived series for one chart, aligned with `timestamps`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IndicatorBundle {
    pub timestamps: Vec<DateTime<Utc>>,
    pub close: Vec<Price>,
    pub bollinger: BollingerSeries,
    /// Simple moving averages keyed by period.
    pub sma: BTreeMap<usize, Series>,
    pub macd: MacdSeries,
    pub rsi: Series,
    pub fibonacci: FibonacciLevels,
    pub volume: Vec<VolumeBar>,
    pub summary: PriceSummary,
    pub reference_lines: ReferenceLines,
}

impl IndicatorBundle {
    /// Number of bars covered by the bundle.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Moving average for `period`, if it was configured.
    pub fn sma(&self, period: usize) -> Option<&Series> {
        self.sma.get(&period)
    }
}

/// One bar of the volume panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VolumeBar {
    pub timestamp: DateTime<Utc>,
    pub volume: Decimal,
    pub direction: BarDirection,
}

impl From<&Candle> for VolumeBar {
    fn from(candle: &Candle) -> Self {
        Self {
            timestamp: candle.timestamp,
            volume: candle.volume,
            direction: candle.direction(),
        }
    }
}

/// Headline figures for the chart title.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PriceSummary {
    pub first_close: Price,
    pub last_close: Price,
    /// Percent change from the first to the last close; `None` when the first
    /// close is zero or the change is too large to represent.
    pub change_percent: Option<Decimal>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl PriceSummary {
    pub fn from_series(series: &CandleSeries) -> Self {
        let first = series.first();
        let last = series.last();
        let change_percent = (last.close - first.close)
            .checked_div(first.close)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED));
        Self {
            first_close: first.close,
            last_close: last.close,
            change_percent,
            start: first.timestamp,
            end: last.timestamp,
        }
    }
}
