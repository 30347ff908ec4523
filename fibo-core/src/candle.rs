use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Price;

/// A single OHLCV bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    pub volume: Decimal,
}

impl Candle {
    /// Direction of the bar body, used to colour volume bars.
    pub fn direction(&self) -> BarDirection {
        if self.close < self.open {
            BarDirection::Down
        } else {
            BarDirection::Up
        }
    }
}

/// Whether a bar closed above or below its open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarDirection {
    /// Close at or above open.
    Up,
    /// Close strictly below open.
    Down,
}
