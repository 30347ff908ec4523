//! Built-in indicator implementations provided by the crate.

pub mod bollinger;
pub mod ema;
pub mod fibonacci;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use bollinger::{BollingerBands, BollingerBandsOutput};
pub use ema::Ema;
pub use fibonacci::{FibLevel, FibRatio, FibonacciLevels};
pub use macd::{Macd, MacdOutput};
pub use rsi::Rsi;
pub use sma::Sma;
