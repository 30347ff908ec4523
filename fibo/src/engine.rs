//! Indicator engine turning a candle series into a chart bundle.

use std::collections::BTreeMap;

use fibo_config::IndicatorSettings;
use fibo_core::{Candle, CandleSeries};
use fibo_indicators::batch;
use fibo_indicators::indicators::{BollingerBands, Macd, Rsi, Sma};
use fibo_indicators::{BollingerSeries, IndicatorError, MacdSeries, Series};
use rust_decimal::Decimal;
use tracing::debug;

use crate::bundle::{IndicatorBundle, PriceSummary, VolumeBar};
use crate::error::{EngineError, EngineResult};

/// Computes every chart indicator from one immutable series.
///
/// The engine holds only its settings, so a single instance can serve
/// concurrent callers.
#[derive(Clone, Debug, Default)]
pub struct IndicatorEngine {
    settings: IndicatorSettings,
}

impl IndicatorEngine {
    /// Builds an engine, rejecting settings that fail validation or that no
    /// indicator can be built from.
    pub fn new(settings: IndicatorSettings) -> EngineResult<Self> {
        settings.validate().map_err(EngineError::Settings)?;
        let bollinger = &settings.bollinger;
        BollingerBands::<Decimal>::new(bollinger.window, bollinger.multiplier)?;
        for period in &settings.sma.periods {
            Sma::<Decimal>::new(*period)?;
        }
        let macd = &settings.macd;
        Macd::<Decimal>::new(macd.fast, macd.slow, macd.signal)?;
        Rsi::<Decimal>::new(settings.rsi.period)?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &IndicatorSettings {
        &self.settings
    }

    /// Validates raw candles and computes the bundle.
    pub fn compute_candles(&self, candles: Vec<Candle>) -> EngineResult<IndicatorBundle> {
        let series = CandleSeries::new(candles)?;
        self.compute(&series)
    }

    /// Computes the bundle, running independent indicators on the rayon pool.
    pub fn compute(&self, series: &CandleSeries) -> EngineResult<IndicatorBundle> {
        debug!(bars = series.len(), "computing indicator bundle");
        let ((bollinger, sma), (macd, rsi)) = rayon::join(
            || rayon::join(|| self.bollinger(series), || self.moving_averages(series)),
            || rayon::join(|| self.macd(series), || self.rsi(series)),
        );
        let bundle = self.assemble(series, bollinger?, sma?, macd?, rsi?);
        debug!(
            bars = bundle.len(),
            averages = bundle.sma.len(),
            "indicator bundle ready"
        );
        Ok(bundle)
    }

    /// Computes the bundle on the calling thread only.
    pub fn compute_sequential(&self, series: &CandleSeries) -> EngineResult<IndicatorBundle> {
        debug!(bars = series.len(), "computing indicator bundle sequentially");
        let bollinger = self.bollinger(series)?;
        let sma = self.moving_averages(series)?;
        let macd = self.macd(series)?;
        let rsi = self.rsi(series)?;
        Ok(self.assemble(series, bollinger, sma, macd, rsi))
    }

    fn bollinger(&self, series: &CandleSeries) -> Result<BollingerSeries, IndicatorError> {
        let cfg = &self.settings.bollinger;
        batch::bollinger_bands(series, cfg.window, cfg.multiplier)
    }

    fn moving_averages(
        &self,
        series: &CandleSeries,
    ) -> Result<BTreeMap<usize, Series>, IndicatorError> {
        self.settings
            .sma
            .periods
            .iter()
            .map(|period| batch::sma(series, *period).map(|values| (*period, values)))
            .collect()
    }

    fn macd(&self, series: &CandleSeries) -> Result<MacdSeries, IndicatorError> {
        let cfg = &self.settings.macd;
        batch::macd(series, cfg.fast, cfg.slow, cfg.signal)
    }

    fn rsi(&self, series: &CandleSeries) -> Result<Series, IndicatorError> {
        batch::rsi(series, self.settings.rsi.period)
    }

    fn assemble(
        &self,
        series: &CandleSeries,
        bollinger: BollingerSeries,
        sma: BTreeMap<usize, Series>,
        macd: MacdSeries,
        rsi: Series,
    ) -> IndicatorBundle {
        IndicatorBundle {
            timestamps: series.timestamps(),
            close: series.closes(),
            bollinger,
            sma,
            macd,
            rsi,
            fibonacci: batch::fibonacci_levels(series),
            volume: series.iter().map(VolumeBar::from).collect(),
            summary: PriceSummary::from_series(series),
            reference_lines: self.settings.reference_lines,
        }
    }
}
