//! Invariants that must hold for every candle series.

use fibo_core::CandleSeries;
use fibo_indicators::batch;
use fibo_indicators::indicators::FibRatio;
use fibo_indicators::series::first_defined;
use fibo_test_utils::{
    candles_from_closes, constant_closes, falling_closes, rising_closes, series_from_closes,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn closes_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(100i64..100_000, min_len..=max_len)
        .prop_map(|cents| cents.into_iter().map(|c| Decimal::new(c, 2)).collect())
}

proptest! {
    #[test]
    fn every_series_matches_input_length(
        closes in closes_strategy(1, 80),
        window in 1usize..40,
        period in 1usize..30,
    ) {
        let series = series_from_closes(&closes);
        let n = series.len();

        let bands = batch::bollinger_bands(&series, window, dec!(2)).unwrap();
        prop_assert_eq!(bands.middle.len(), n);
        prop_assert_eq!(bands.upper.len(), n);
        prop_assert_eq!(bands.lower.len(), n);
        prop_assert_eq!(batch::sma(&series, window).unwrap().len(), n);
        prop_assert_eq!(batch::rsi(&series, period).unwrap().len(), n);

        let macd = batch::macd(&series, 12, 26, 9).unwrap();
        prop_assert_eq!(macd.macd.len(), n);
        prop_assert_eq!(macd.signal.len(), n);
        prop_assert_eq!(macd.histogram.len(), n);
    }

    #[test]
    fn warm_up_boundaries_follow_windows(
        closes in closes_strategy(1, 80),
        window in 1usize..40,
    ) {
        let series = series_from_closes(&closes);
        let sma = batch::sma(&series, window).unwrap();
        let rsi = batch::rsi(&series, window).unwrap();

        let expected_sma = (closes.len() >= window).then_some(window - 1);
        let expected_rsi = (closes.len() > window).then_some(window);
        prop_assert_eq!(first_defined(&sma), expected_sma);
        prop_assert_eq!(first_defined(&rsi), expected_rsi);
        if let Some(start) = expected_sma {
            prop_assert!(sma[start..].iter().all(Option::is_some));
        }
    }

    #[test]
    fn rsi_stays_within_bounds(closes in closes_strategy(2, 80), period in 1usize..20) {
        let series = series_from_closes(&closes);
        for value in batch::rsi(&series, period).unwrap().into_iter().flatten() {
            prop_assert!(value >= Decimal::ZERO && value <= Decimal::ONE_HUNDRED);
        }
    }

    #[test]
    fn bands_bracket_the_mean(closes in closes_strategy(1, 60), window in 1usize..30) {
        let series = series_from_closes(&closes);
        let bands = batch::bollinger_bands(&series, window, dec!(2)).unwrap();
        for idx in 0..series.len() {
            if let (Some(upper), Some(middle), Some(lower)) =
                (bands.upper[idx], bands.middle[idx], bands.lower[idx])
            {
                prop_assert!(lower <= middle && middle <= upper);
            }
        }
    }

    #[test]
    fn fibonacci_levels_span_the_range(closes in closes_strategy(1, 60)) {
        let series = series_from_closes(&closes);
        let levels = batch::fibonacci_levels(&series);
        prop_assert_eq!(levels.level(FibRatio::Zero), series.max_high());
        prop_assert_eq!(levels.level(FibRatio::Full), series.min_low());
        let prices: Vec<_> = levels.iter().map(|level| level.price).collect();
        prop_assert!(prices.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn recomputation_is_identical(closes in closes_strategy(1, 60)) {
        let series = series_from_closes(&closes);
        prop_assert_eq!(
            batch::bollinger_bands(&series, 20, dec!(2)).unwrap(),
            batch::bollinger_bands(&series, 20, dec!(2)).unwrap()
        );
        prop_assert_eq!(batch::macd(&series, 12, 26, 9).unwrap(), batch::macd(&series, 12, 26, 9).unwrap());
        prop_assert_eq!(batch::rsi(&series, 14).unwrap(), batch::rsi(&series, 14).unwrap());
    }
}

#[test]
fn constant_series_collapses_every_indicator() {
    let series = series_from_closes(&constant_closes(dec!(250.5), 40));

    let bands = batch::bollinger_bands(&series, 20, dec!(2)).unwrap();
    for idx in 19..40 {
        assert_eq!(bands.upper[idx], Some(dec!(250.5)));
        assert_eq!(bands.middle[idx], Some(dec!(250.5)));
        assert_eq!(bands.lower[idx], Some(dec!(250.5)));
    }

    let rsi = batch::rsi(&series, 14).unwrap();
    assert!(rsi[..14].iter().all(Option::is_none));
    assert!(rsi[14..].iter().all(|value| *value == Some(dec!(100))));

    let macd = batch::macd(&series, 12, 26, 9).unwrap();
    assert!(macd.histogram.iter().all(Decimal::is_zero));
    assert!(macd.macd.iter().all(Decimal::is_zero));
}

#[test]
fn rising_series_saturates_rsi_high() {
    let series = series_from_closes(&rising_closes(50, 40));
    let rsi = batch::rsi(&series, 14).unwrap();
    assert!(rsi[14..].iter().all(|value| *value == Some(dec!(100))));
}

#[test]
fn falling_series_floors_rsi() {
    let series = series_from_closes(&falling_closes(200, 40));
    let rsi = batch::rsi(&series, 14).unwrap();
    assert!(rsi[14..].iter().all(|value| *value == Some(Decimal::ZERO)));
}

#[test]
fn sma_longer_than_series_is_undefined() {
    let series = series_from_closes(&rising_closes(1, 150));
    let sma_200 = batch::sma(&series, 200).unwrap();
    assert_eq!(sma_200.len(), 150);
    assert!(sma_200.iter().all(Option::is_none));

    let sma_90 = batch::sma(&series, 90).unwrap();
    assert_eq!(first_defined(&sma_90), Some(89));
}

#[test]
fn bollinger_reference_example() {
    let series = series_from_closes(&rising_closes(10, 20));
    let bands = batch::bollinger_bands(&series, 20, dec!(2)).unwrap();
    assert_eq!(first_defined(&bands.middle), Some(19));
    assert_eq!(bands.middle[19], Some(dec!(19.5)));

    // Sample variance of 20 consecutive integers is 35, so std = sqrt(35).
    let upper = bands.upper[19].unwrap();
    let expected = dec!(19.5) + dec!(2) * dec!(5.9160797831);
    assert!((upper - expected).abs() < dec!(0.000001), "{upper} != {expected}");
}

#[test]
fn fibonacci_uses_highs_and_lows_not_closes() {
    let mut candles = candles_from_closes(&[dec!(10), dec!(20), dec!(15)]);
    candles[1].high = dec!(30);
    candles[2].low = dec!(2);
    let series = CandleSeries::new(candles).unwrap();
    let levels = batch::fibonacci_levels(&series);
    assert_eq!(levels.high(), dec!(30));
    assert_eq!(levels.low(), dec!(2));
    assert_eq!(levels.level(FibRatio::R500), dec!(16));
}
