use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::Price;

/// Result alias for series construction.
pub type SeriesResult<T> = Result<T, SeriesError>;

/// Precondition violations detected when a candle series enters the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("candle series is empty")]
    Empty,
    #[error(
        "candle {index} has timestamp {current} which does not follow the previous timestamp {previous}"
    )]
    NonMonotonicTimestamp {
        index: usize,
        previous: DateTime<Utc>,
        current: DateTime<Utc>,
    },
    #[error("candle {index} has a negative volume")]
    NegativeVolume { index: usize },
    #[error("candle {index} has a price outside [-{max}, {max}]")]
    PriceOutOfRange { index: usize, max: Price },
}
