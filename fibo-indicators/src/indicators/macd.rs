//! Moving Average Convergence Divergence indicator implementation.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{Indicator, IndicatorError, Input};
use crate::indicators::ema::Ema;

/// MACD output (line, signal line, and histogram).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MacdOutput {
    /// MACD line value (fast EMA minus slow EMA).
    pub macd: Decimal,
    /// Signal line value (EMA of the MACD line).
    pub signal: Decimal,
    /// Histogram representing the distance between MACD and signal lines.
    pub histogram: Decimal,
}

/// Moving Average Convergence Divergence indicator.
///
/// Every component is an [`Ema`] seeded with its first observation, so an
/// output is available from the first input onward.
#[derive(Debug, Clone)]
pub struct Macd<I = Decimal> {
    fast: Ema<I>,
    slow: Ema<I>,
    signal: Ema,
}

impl<I> Macd<I>
where
    I: Input + Copy,
{
    /// Create a MACD indicator with custom fast/slow/signal spans.
    pub fn new(
        fast_period: usize,
        slow_period: usize,
        signal_period: usize,
    ) -> Result<Self, IndicatorError> {
        if fast_period == 0 {
            return Err(IndicatorError::invalid_period("MACD", fast_period));
        }
        if slow_period == 0 {
            return Err(IndicatorError::invalid_period("MACD", slow_period));
        }
        if signal_period == 0 {
            return Err(IndicatorError::invalid_period("MACD", signal_period));
        }
        Ok(Self {
            fast: Ema::new(fast_period)?,
            slow: Ema::new(slow_period)?,
            signal: Ema::new(signal_period)?,
        })
    }
}

impl<I> Indicator for Macd<I>
where
    I: Input + Copy,
{
    type Input = I;
    type Output = MacdOutput;

    fn next(&mut self, input: Self::Input) -> Option<Self::Output> {
        let fast = self.fast.next(input)?;
        let slow = self.slow.next(input)?;
        let macd = fast - slow;
        let signal = self.signal.next(macd)?;
        Some(MacdOutput {
            macd,
            signal,
            histogram: macd - signal,
        })
    }

    fn reset(&mut self) {
        self.fast.reset();
        self.slow.reset();
        self.signal.reset();
    }
}
