use fibo_core::SeriesError;
use fibo_indicators::IndicatorError;
use thiserror::Error;

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Failures surfaced while building an indicator bundle.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid candle series: {0}")]
    Series(#[from] SeriesError),
    #[error("invalid indicator configuration: {0}")]
    Indicator(#[from] IndicatorError),
    #[error("invalid settings: {0:#}")]
    Settings(anyhow::Error),
}
