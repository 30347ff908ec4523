//! Relative Strength Index (RSI).

use std::collections::VecDeque;
use std::marker::PhantomData;

use rust_decimal::Decimal;

use crate::core::{decimal_from_usize, ensure_period, Indicator, IndicatorError, Input};

/// Computes the RSI oscillator from simple rolling means of gains and losses.
///
/// The first output is produced once `period` price changes have been
/// observed, i.e. on the `period + 1`-th input. When the average loss over
/// the window is zero the RSI saturates to exactly 100, including a flat
/// window with no gains either. A window with losses but no gains yields 0.
#[derive(Debug, Clone)]
pub struct Rsi<I = Decimal> {
    period: usize,
    divisor: Decimal,
    prev_value: Option<Decimal>,
    gains: VecDeque<Decimal>,
    losses: VecDeque<Decimal>,
    gain_sum: Decimal,
    loss_sum: Decimal,
    marker: PhantomData<I>,
}

impl<I> Rsi<I>
where
    I: Input,
{
    /// Creates a new RSI with the provided period.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        ensure_period("RSI", period)?;

        Ok(Self {
            period,
            divisor: decimal_from_usize(period),
            prev_value: None,
            gains: VecDeque::with_capacity(period),
            losses: VecDeque::with_capacity(period),
            gain_sum: Decimal::ZERO,
            loss_sum: Decimal::ZERO,
            marker: PhantomData,
        })
    }

    /// Returns the configured lookback period.
    pub fn period(&self) -> usize {
        self.period
    }

    fn compute_rsi(avg_gain: Decimal, avg_loss: Decimal) -> Decimal {
        if avg_loss.is_zero() {
            Decimal::ONE_HUNDRED
        } else if avg_gain.is_zero() {
            Decimal::ZERO
        } else {
            // 100 - 100 / (1 + gain / loss), without the unbounded ratio.
            Decimal::ONE_HUNDRED * avg_gain / (avg_gain + avg_loss)
        }
    }
}

impl<I> Indicator for Rsi<I>
where
    I: Input,
{
    type Input = I;
    type Output = Decimal;

    fn next(&mut self, input: Self::Input) -> Option<Self::Output> {
        let value = input.value();

        let prev = self.prev_value.replace(value)?;

        let change = value - prev;
        let gain = change.max(Decimal::ZERO);
        let loss = (-change).max(Decimal::ZERO);

        self.gains.push_back(gain);
        self.losses.push_back(loss);
        self.gain_sum += gain;
        self.loss_sum += loss;

        if self.gains.len() > self.period {
            if let Some(oldest) = self.gains.pop_front() {
                self.gain_sum -= oldest;
            }
            if let Some(oldest) = self.losses.pop_front() {
                self.loss_sum -= oldest;
            }
        }

        if self.gains.len() < self.period {
            return None;
        }

        let avg_gain = self.gain_sum / self.divisor;
        let avg_loss = self.loss_sum / self.divisor;
        Some(Self::compute_rsi(avg_gain, avg_loss))
    }

    fn reset(&mut self) {
        self.prev_value = None;
        self.gains.clear();
        self.losses.clear();
        self.gain_sum = Decimal::ZERO;
        self.loss_sum = Decimal::ZERO;
    }
}
