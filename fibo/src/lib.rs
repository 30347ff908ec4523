//! Fibo computes the indicator overlays of a composite technical-analysis
//! chart: Bollinger bands, simple moving averages, MACD, RSI and Fibonacci
//! retracement levels, plus the volume panel and title summary.
//!
//! ```rust,ignore
//! use fibo::{IndicatorEngine, IndicatorSettings};
//!
//! let engine = IndicatorEngine::new(IndicatorSettings::default())?;
//! let bundle = engine.compute_candles(candles)?;
//! assert_eq!(bundle.rsi.len(), bundle.len());
//! ```

mod bundle;
mod engine;
mod error;

pub use bundle::{IndicatorBundle, PriceSummary, VolumeBar};
pub use engine::IndicatorEngine;
pub use error::{EngineError, EngineResult};

pub use fibo_config::{load_settings, IndicatorSettings, ReferenceLines};
pub use fibo_core::{BarDirection, Candle, CandleSeries, SeriesError, MAX_ABS_PRICE};
pub use fibo_indicators as indicators;
pub use fibo_indicators::indicators::{FibLevel, FibRatio, FibonacciLevels};
pub use fibo_indicators::{BollingerSeries, MacdSeries, Series};
