use std::ops::Index;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Candle, Price, SeriesError, SeriesResult, MAX_ABS_PRICE};

/// Validated, chronologically ordered OHLCV series.
///
/// A `CandleSeries` is never empty and its timestamps are strictly increasing.
/// Every volume is non-negative and every price lies within
/// [`MAX_ABS_PRICE`](crate::MAX_ABS_PRICE) of zero. Indicators borrow it and never mutate
/// it, so one series can be shared across concurrent computations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Candle>", into = "Vec<Candle>")]
pub struct CandleSeries {
    candles: Vec<Candle>,
}

impl CandleSeries {
    /// Validates `candles` and wraps them in a series.
    ///
    /// Out-of-order input is rejected rather than sorted.
    pub fn new(candles: Vec<Candle>) -> SeriesResult<Self> {
        if candles.is_empty() {
            return Err(SeriesError::Empty);
        }
        for (index, candle) in candles.iter().enumerate() {
            if candle.volume < Price::ZERO {
                return Err(SeriesError::NegativeVolume { index });
            }
            let prices = [candle.open, candle.high, candle.low, candle.close];
            if prices.iter().any(|price| price.abs() > MAX_ABS_PRICE) {
                return Err(SeriesError::PriceOutOfRange {
                    index,
                    max: MAX_ABS_PRICE,
                });
            }
        }
        for (offset, pair) in candles.windows(2).enumerate() {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(SeriesError::NonMonotonicTimestamp {
                    index: offset + 1,
                    previous: pair[0].timestamp,
                    current: pair[1].timestamp,
                });
            }
        }
        Ok(Self { candles })
    }

    /// Number of bars in the series.
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// Always `false`: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candle> {
        self.candles.iter()
    }

    pub fn first(&self) -> &Candle {
        &self.candles[0]
    }

    pub fn last(&self) -> &Candle {
        &self.candles[self.candles.len() - 1]
    }

    /// Closing prices in series order.
    pub fn closes(&self) -> Vec<Price> {
        self.candles.iter().map(|candle| candle.close).collect()
    }

    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.candles.iter().map(|candle| candle.timestamp).collect()
    }

    /// Highest `high` across the whole series.
    pub fn max_high(&self) -> Price {
        self.candles
            .iter()
            .map(|candle| candle.high)
            .fold(self.first().high, Price::max)
    }

    /// Lowest `low` across the whole series.
    pub fn min_low(&self) -> Price {
        self.candles
            .iter()
            .map(|candle| candle.low)
            .fold(self.first().low, Price::min)
    }

    pub fn into_inner(self) -> Vec<Candle> {
        self.candles
    }
}

impl TryFrom<Vec<Candle>> for CandleSeries {
    type Error = SeriesError;

    fn try_from(value: Vec<Candle>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CandleSeries> for Vec<Candle> {
    fn from(value: CandleSeries) -> Self {
        value.candles
    }
}

impl Index<usize> for CandleSeries {
    type Output = Candle;

    fn index(&self, index: usize) -> &Self::Output {
        &self.candles[index]
    }
}

impl<'a> IntoIterator for &'a CandleSeries {
    type Item = &'a Candle;
    type IntoIter = std::slice::Iter<'a, Candle>;

    fn into_iter(self) -> Self::IntoIter {
        self.candles.iter()
    }
}
