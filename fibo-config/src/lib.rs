//! Typed indicator settings and their layered loading.
//!
//! Settings resolve from built-in defaults, then an optional TOML file, then
//! `FIBO__`-prefixed environment variables (for example
//! `FIBO__RSI__PERIOD=21` or `FIBO__SMA__PERIODS=50,200`).

use std::path::Path;

use anyhow::{ensure, Context, Result};
use config::{Config, Environment, File, FileFormat};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "FIBO";

/// Largest accepted Bollinger standard-deviation multiplier.
pub const MAX_BOLLINGER_MULTIPLIER: Decimal = Decimal::ONE_HUNDRED;

/// Full set of indicator parameters used to build a chart bundle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorSettings {
    pub bollinger: BollingerSettings,
    pub sma: SmaSettings,
    pub macd: MacdSettings,
    pub rsi: RsiSettings,
    pub reference_lines: ReferenceLines,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BollingerSettings {
    pub window: usize,
    pub multiplier: Decimal,
}

impl Default for BollingerSettings {
    fn default() -> Self {
        Self {
            window: 20,
            multiplier: Decimal::TWO,
        }
    }
}

/// Each period produces an independent moving average overlay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmaSettings {
    pub periods: Vec<usize>,
}

impl Default for SmaSettings {
    fn default() -> Self {
        Self {
            periods: vec![90, 200],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacdSettings {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl Default for MacdSettings {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RsiSettings {
    pub period: usize,
}

impl Default for RsiSettings {
    fn default() -> Self {
        Self { period: 14 }
    }
}

/// Fixed horizontal guides drawn on the oscillator panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceLines {
    pub rsi_overbought: Decimal,
    pub rsi_oversold: Decimal,
    pub rsi_midline: Decimal,
    pub macd_zero: Decimal,
}

impl Default for ReferenceLines {
    fn default() -> Self {
        Self {
            rsi_overbought: Decimal::from(70),
            rsi_oversold: Decimal::from(30),
            rsi_midline: Decimal::from(50),
            macd_zero: Decimal::ZERO,
        }
    }
}

impl IndicatorSettings {
    /// Parses settings from a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let settings: Self = toml::from_str(raw).context("failed to parse indicator settings")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks that every indicator can be built from these settings.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.bollinger.window > 0, "bollinger.window must be positive");
        let multiplier = self.bollinger.multiplier;
        ensure!(
            (!multiplier.is_sign_negative() || multiplier.is_zero())
                && multiplier <= MAX_BOLLINGER_MULTIPLIER,
            "bollinger.multiplier must lie within [0, {MAX_BOLLINGER_MULTIPLIER}] (got {multiplier})"
        );
        ensure!(
            !self.sma.periods.is_empty(),
            "sma.periods must list at least one period"
        );
        ensure!(
            self.sma.periods.iter().all(|period| *period > 0),
            "sma.periods must all be positive (got {:?})",
            self.sma.periods
        );
        ensure!(
            self.macd.fast > 0 && self.macd.slow > 0 && self.macd.signal > 0,
            "macd spans must be positive"
        );
        ensure!(self.rsi.period > 0, "rsi.period must be positive");

        let lines = &self.reference_lines;
        let hundred = Decimal::ONE_HUNDRED;
        for (name, value) in [
            ("rsi_overbought", lines.rsi_overbought),
            ("rsi_oversold", lines.rsi_oversold),
            ("rsi_midline", lines.rsi_midline),
        ] {
            ensure!(
                value >= Decimal::ZERO && value <= hundred,
                "reference_lines.{name} must lie within [0, 100] (got {value})"
            );
        }
        ensure!(
            lines.rsi_oversold < lines.rsi_overbought,
            "reference_lines.rsi_oversold must be below rsi_overbought"
        );
        Ok(())
    }
}

/// Resolves settings from defaults, an optional TOML file and the environment.
pub fn load_settings(path: Option<&Path>) -> Result<IndicatorSettings> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
    }
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("sma.periods"),
    );

    let settings: IndicatorSettings = builder
        .build()
        .context("failed to assemble indicator settings")?
        .try_deserialize()
        .context("failed to deserialize indicator settings")?;
    settings.validate()?;

    if let Some(path) = path {
        info!(path = %path.display(), "loaded indicator settings");
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rust_decimal_macros::dec;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn defaults_match_classic_chart() {
        let settings = IndicatorSettings::default();
        assert_eq!(settings.bollinger.window, 20);
        assert_eq!(settings.bollinger.multiplier, dec!(2));
        assert_eq!(settings.sma.periods, vec![90, 200]);
        assert_eq!(
            (settings.macd.fast, settings.macd.slow, settings.macd.signal),
            (12, 26, 9)
        );
        assert_eq!(settings.rsi.period, 14);
        assert_eq!(settings.reference_lines.rsi_overbought, dec!(70));
        assert_eq!(settings.reference_lines.rsi_oversold, dec!(30));
        assert_eq!(settings.reference_lines.rsi_midline, dec!(50));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let settings = IndicatorSettings::from_toml_str(
            r#"
            [bollinger]
            multiplier = 2.5

            [sma]
            periods = [50]
            "#,
        )
        .unwrap();
        assert_eq!(settings.bollinger.window, 20);
        assert_eq!(settings.bollinger.multiplier, dec!(2.5));
        assert_eq!(settings.sma.periods, vec![50]);
        assert_eq!(settings.rsi, RsiSettings::default());
    }

    #[test]
    fn rejects_zero_periods() {
        let err = IndicatorSettings::from_toml_str("[rsi]\nperiod = 0\n").unwrap_err();
        assert!(err.to_string().contains("rsi.period"));

        let err = IndicatorSettings::from_toml_str("[sma]\nperiods = [90, 0]\n").unwrap_err();
        assert!(err.to_string().contains("sma.periods"));
    }

    #[test]
    fn rejects_inverted_reference_lines() {
        let mut settings = IndicatorSettings::default();
        settings.reference_lines.rsi_oversold = dec!(80);
        assert!(settings.validate().is_err());

        settings.reference_lines.rsi_oversold = dec!(30);
        settings.reference_lines.rsi_overbought = dec!(120);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn loads_settings_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[macd]\nfast = 8\nslow = 21\nsignal = 5").unwrap();

        let settings = load_settings(Some(file.path())).unwrap();
        assert_eq!(
            settings.macd,
            MacdSettings {
                fast: 8,
                slow: 21,
                signal: 5
            }
        );
        assert_eq!(settings.bollinger, BollingerSettings::default());
    }

    #[test]
    fn environment_overrides_file_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[bollinger]\nmultiplier = 2.5\n\n[rsi]\nperiod = 9\n\n[sma]\nperiods = [10]"
        )
        .unwrap();

        let vars = [
            ("FIBO__RSI__PERIOD", "21"),
            ("FIBO__SMA__PERIODS", "50,200"),
            ("FIBO__REFERENCE_LINES__RSI_OVERBOUGHT", "80"),
        ];
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
        let loaded = load_settings(Some(file.path()));
        for (key, _) in vars {
            std::env::remove_var(key);
        }

        let settings = loaded.unwrap();
        assert_eq!(settings.rsi.period, 21);
        assert_eq!(settings.sma.periods, vec![50, 200]);
        assert_eq!(settings.bollinger.multiplier, dec!(2.5));
        assert_eq!(settings.reference_lines.rsi_overbought, dec!(80));
        assert_eq!(settings.reference_lines.rsi_oversold, dec!(30));
    }

    #[test]
    fn rejects_oversized_multiplier() {
        let err = IndicatorSettings::from_toml_str("[bollinger]\nmultiplier = 250\n").unwrap_err();
        assert!(err.to_string().contains("bollinger.multiplier"));
        assert!(IndicatorSettings::from_toml_str("[bollinger]\nmultiplier = 100\n").is_ok());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(load_settings(Some(&path)).is_err());
    }
}
