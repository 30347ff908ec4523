//! Exponential Moving Average (EMA).

use std::marker::PhantomData;

use rust_decimal::Decimal;

use crate::core::{decimal_from_usize, ensure_period, Indicator, IndicatorError, Input};

/// Recursively smoothed average seeded with the first observation.
///
/// Uses `alpha = 2 / (span + 1)` with no bias adjustment, so a value is
/// produced from the very first input onward.
#[derive(Debug, Clone)]
pub struct Ema<I = Decimal> {
    span: usize,
    alpha: Decimal,
    state: Option<Decimal>,
    marker: PhantomData<I>,
}

impl<I> Ema<I>
where
    I: Input,
{
    /// Creates a new EMA with the provided smoothing span.
    pub fn new(span: usize) -> Result<Self, IndicatorError> {
        ensure_period("EMA", span)?;

        let alpha = Decimal::TWO / decimal_from_usize(span + 1);

        Ok(Self {
            span,
            alpha,
            state: None,
            marker: PhantomData,
        })
    }

    /// Returns the configured smoothing span.
    pub fn span(&self) -> usize {
        self.span
    }

    /// Returns the current EMA value, if the indicator has seen any input.
    pub fn value(&self) -> Option<Decimal> {
        self.state
    }
}

impl<I> Indicator for Ema<I>
where
    I: Input,
{
    type Input = I;
    type Output = Decimal;

    fn next(&mut self, input: Self::Input) -> Option<Self::Output> {
        let value = input.value();
        let next = match self.state {
            Some(current) => (value - current) * self.alpha + current,
            None => value,
        };
        self.state = Some(next);
        Some(next)
    }

    fn reset(&mut self) {
        self.state = None;
    }
}
