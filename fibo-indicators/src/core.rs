//! Core traits and error types shared by every indicator.

use std::fmt::Display;

use fibo_core::Candle;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::series::Series;

/// Streaming indicator fed one observation at a time.
///
/// `next` returns `None` while the indicator lacks enough history and
/// `Some(value)` once it can produce an output for the latest observation.
pub trait Indicator {
    /// Type of value consumed per step.
    type Input;
    /// Type of value produced per step.
    type Output;

    /// Feeds one observation and returns the output aligned with it.
    fn next(&mut self, input: Self::Input) -> Option<Self::Output>;

    /// Clears all internal state, returning the indicator to its initial warm-up.
    fn reset(&mut self);

    /// Runs the indicator from a clean state over `inputs`.
    ///
    /// The returned series has exactly one entry per input.
    fn batch<It>(&mut self, inputs: It) -> Series<Self::Output>
    where
        Self: Sized,
        It: IntoIterator<Item = Self::Input>,
    {
        self.reset();
        inputs.into_iter().map(|input| self.next(input)).collect()
    }
}

/// Values that can be reduced to a single price for single-series indicators.
pub trait Input {
    /// Price extracted from the input.
    fn value(&self) -> Decimal;
}

impl Input for Decimal {
    fn value(&self) -> Decimal {
        *self
    }
}

impl Input for Candle {
    fn value(&self) -> Decimal {
        self.close
    }
}

impl Input for &Candle {
    fn value(&self) -> Decimal {
        self.close
    }
}

/// Errors raised when an indicator is configured with unusable parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    /// A lookback period or span of zero was requested.
    #[error("{name} period must be greater than zero (got {period})")]
    InvalidPeriod {
        /// Indicator name.
        name: &'static str,
        /// Rejected period.
        period: usize,
    },
    /// A non-period parameter is out of range.
    #[error("{name} parameter `{parameter}` is invalid: {value}")]
    InvalidParameter {
        /// Indicator name.
        name: &'static str,
        /// Parameter name.
        parameter: &'static str,
        /// Rejected value, rendered for display.
        value: String,
    },
}

impl IndicatorError {
    /// Builds an [`IndicatorError::InvalidPeriod`].
    pub fn invalid_period(name: &'static str, period: usize) -> Self {
        Self::InvalidPeriod { name, period }
    }

    /// Builds an [`IndicatorError::InvalidParameter`].
    pub fn invalid_parameter(
        name: &'static str,
        parameter: &'static str,
        value: impl Display,
    ) -> Self {
        Self::InvalidParameter {
            name,
            parameter,
            value: value.to_string(),
        }
    }
}

pub(crate) fn decimal_from_usize(value: usize) -> Decimal {
    Decimal::from(value)
}

pub(crate) fn ensure_period(name: &'static str, period: usize) -> Result<(), IndicatorError> {
    if period == 0 {
        Err(IndicatorError::invalid_period(name, period))
    } else {
        Ok(())
    }
}
