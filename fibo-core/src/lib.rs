//! Core OHLCV domain types shared by every Fibo crate.

mod candle;
mod error;
mod series;

pub use candle::{BarDirection, Candle};
pub use error::{SeriesError, SeriesResult};
pub use series::CandleSeries;

/// Price value used throughout the workspace.
pub type Price = rust_decimal::Decimal;

/// Largest absolute open/high/low/close accepted into a [`CandleSeries`] (1e12).
///
/// Squared deviations and rolling sums over prices in this range stay
/// representable as [`Price`].
pub const MAX_ABS_PRICE: Price = Price::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);
