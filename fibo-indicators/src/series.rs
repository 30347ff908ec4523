//! Index-aligned derived series.

use rust_decimal::Decimal;

/// A derived series aligned one-to-one with its input.
///
/// `None` marks positions without enough trailing history.
pub type Series<T = Decimal> = Vec<Option<T>>;

/// Index of the first defined value, if any.
pub fn first_defined<T>(series: &[Option<T>]) -> Option<usize> {
    series.iter().position(Option::is_some)
}

/// Number of defined values in the series.
pub fn defined_count<T>(series: &[Option<T>]) -> usize {
    series.iter().filter(|value| value.is_some()).count()
}
