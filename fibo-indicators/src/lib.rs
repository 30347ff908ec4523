#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

//! Technical indicators over decimal prices, usable one bar at a time or
//! over a whole validated candle series.

/// Whole-series indicator functions producing aligned outputs.
pub mod batch;
/// Foundational traits and shared abstractions.
pub mod core;
/// Built-in indicator implementations.
pub mod indicators;
/// Aligned series type and helpers.
pub mod series;

/// Re-export of the batch output bundles.
pub use crate::batch::{BollingerSeries, MacdSeries};
/// Re-export of the core traits and error type to make the crate easy to consume.
pub use crate::core::{Indicator, IndicatorError, Input};
/// Re-export of the aligned series type.
pub use crate::series::Series;
