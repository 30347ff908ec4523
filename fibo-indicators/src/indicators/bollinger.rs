//! Bollinger Bands built on a rolling mean and sample standard deviation.

use std::collections::VecDeque;
use std::marker::PhantomData;

use rust_decimal::{Decimal, MathematicalOps};
use serde::Serialize;

use crate::core::{decimal_from_usize, ensure_period, Indicator, IndicatorError, Input};

/// Output value of the Bollinger Bands indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BollingerBandsOutput {
    /// Upper band (mean + k * std dev).
    pub upper: Decimal,
    /// Middle band (rolling mean).
    pub middle: Decimal,
    /// Lower band (mean - k * std dev).
    pub lower: Decimal,
}

/// Largest accepted standard-deviation multiplier.
pub const MAX_STD_MULTIPLIER: Decimal = Decimal::ONE_HUNDRED;

/// Produces Bollinger Bands from a rolling window.
///
/// The deviation uses the sample estimator (divisor `period - 1`); a window
/// of one observation has zero deviation. The multiplier must lie within
/// `[0, MAX_STD_MULTIPLIER]`.
#[derive(Debug, Clone)]
pub struct BollingerBands<I = Decimal> {
    period: usize,
    divisor: Decimal,
    std_multiplier: Decimal,
    sum: Decimal,
    window: VecDeque<Decimal>,
    marker: PhantomData<I>,
}

impl<I> BollingerBands<I>
where
    I: Input,
{
    /// Creates a new Bollinger Bands indicator.
    pub fn new(period: usize, std_multiplier: Decimal) -> Result<Self, IndicatorError> {
        ensure_period("BollingerBands", period)?;
        let negative = std_multiplier.is_sign_negative() && !std_multiplier.is_zero();
        if negative || std_multiplier > MAX_STD_MULTIPLIER {
            return Err(IndicatorError::invalid_parameter(
                "BollingerBands",
                "std_multiplier",
                std_multiplier,
            ));
        }

        Ok(Self {
            period,
            divisor: decimal_from_usize(period),
            std_multiplier,
            sum: Decimal::ZERO,
            window: VecDeque::with_capacity(period),
            marker: PhantomData,
        })
    }

    /// Returns the configured window length.
    pub fn period(&self) -> usize {
        self.period
    }

    fn sample_std_dev(&self, mean: Decimal) -> Decimal {
        if self.period < 2 {
            return Decimal::ZERO;
        }
        // Each term is scaled before summing so the total stays within the
        // squared price range regardless of the window length.
        let degrees = decimal_from_usize(self.period - 1);
        let variance: Decimal = self
            .window
            .iter()
            .map(|value| {
                let deviation = *value - mean;
                deviation * deviation / degrees
            })
            .sum();
        variance.sqrt().unwrap_or(Decimal::ZERO)
    }

    fn compute_bands(&self) -> BollingerBandsOutput {
        let mean = self.sum / self.divisor;
        let offset = self.std_multiplier * self.sample_std_dev(mean);

        BollingerBandsOutput {
            upper: mean + offset,
            middle: mean,
            lower: mean - offset,
        }
    }
}

impl<I> Indicator for BollingerBands<I>
where
    I: Input,
{
    type Input = I;
    type Output = BollingerBandsOutput;

    fn next(&mut self, input: Self::Input) -> Option<Self::Output> {
        let value = input.value();
        self.window.push_back(value);
        self.sum += value;

        if self.window.len() > self.period {
            if let Some(oldest) = self.window.pop_front() {
                self.sum -= oldest;
            }
        }

        if self.window.len() == self.period {
            Some(self.compute_bands())
        } else {
            None
        }
    }

    fn reset(&mut self) {
        self.sum = Decimal::ZERO;
        self.window.clear();
    }
}
