//! Fibonacci retracement levels over a whole price range.

use fibo_core::CandleSeries;
use rust_decimal::Decimal;
use serde::Serialize;

/// One of the seven standard retracement ratios.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FibRatio {
    /// 0%, the range high.
    Zero,
    /// 23.6%.
    R236,
    /// 38.2%.
    R382,
    /// 50%.
    R500,
    /// 61.8%.
    R618,
    /// 78.6%.
    R786,
    /// 100%, the range low.
    Full,
}

impl FibRatio {
    /// All ratios in ascending order.
    pub const ALL: [FibRatio; 7] = [
        FibRatio::Zero,
        FibRatio::R236,
        FibRatio::R382,
        FibRatio::R500,
        FibRatio::R618,
        FibRatio::R786,
        FibRatio::Full,
    ];

    /// Fraction of the range measured down from the high.
    pub fn ratio(self) -> Decimal {
        match self {
            FibRatio::Zero => Decimal::ZERO,
            FibRatio::R236 => Decimal::new(236, 3),
            FibRatio::R382 => Decimal::new(382, 3),
            FibRatio::R500 => Decimal::new(5, 1),
            FibRatio::R618 => Decimal::new(618, 3),
            FibRatio::R786 => Decimal::new(786, 3),
            FibRatio::Full => Decimal::ONE,
        }
    }

    /// Percentage label, e.g. `"61.8%"`.
    pub fn label(self) -> &'static str {
        match self {
            FibRatio::Zero => "0%",
            FibRatio::R236 => "23.6%",
            FibRatio::R382 => "38.2%",
            FibRatio::R500 => "50%",
            FibRatio::R618 => "61.8%",
            FibRatio::R786 => "78.6%",
            FibRatio::Full => "100%",
        }
    }

    /// Whether the level coincides with the range high or low.
    ///
    /// Charts draw these two lines without an annotation.
    pub fn is_extreme(self) -> bool {
        matches!(self, FibRatio::Zero | FibRatio::Full)
    }
}

/// A retracement ratio paired with its price.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FibLevel {
    /// Ratio of the level.
    pub ratio: FibRatio,
    /// Horizontal price of the level.
    pub price: Decimal,
}

/// Static retracement levels spanning the global high/low of a series.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FibonacciLevels {
    high: Decimal,
    low: Decimal,
    levels: [FibLevel; 7],
}

impl FibonacciLevels {
    /// Builds levels from an explicit range: `level(r) = high - r * (high - low)`.
    pub fn from_range(high: Decimal, low: Decimal) -> Self {
        let diff = high - low;
        let levels = FibRatio::ALL.map(|ratio| FibLevel {
            ratio,
            price: high - ratio.ratio() * diff,
        });
        Self { high, low, levels }
    }

    /// Builds levels from the maximum `high` and minimum `low` of `series`.
    pub fn from_series(series: &CandleSeries) -> Self {
        Self::from_range(series.max_high(), series.min_low())
    }

    /// Range high used to derive the levels.
    pub fn high(&self) -> Decimal {
        self.high
    }

    /// Range low used to derive the levels.
    pub fn low(&self) -> Decimal {
        self.low
    }

    /// Price of the requested level.
    pub fn level(&self, ratio: FibRatio) -> Decimal {
        self.levels[ratio as usize].price
    }

    /// Levels in ascending ratio order (descending price).
    pub fn iter(&self) -> impl Iterator<Item = &FibLevel> {
        self.levels.iter()
    }
}
