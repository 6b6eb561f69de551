use crate::core::currency::{CurrencyCode, CurrencyPair};
use crate::core::error::DomainError;
use crate::core::scenario::{RateGrid, ScenarioParameters};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors arising while loading a scenario file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read scenario file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid scenario: {0}")]
    Domain(#[from] DomainError),
}

/// Grid section of a scenario file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub min: Decimal,
    pub max: Decimal,
    pub points: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min: dec!(0.80),
            max: dec!(0.95),
            points: 16,
        }
    }
}

/// On-disk description of a scenario.
///
/// Amounts and rates are JSON strings so they parse into exact decimals.
/// Any field left out takes its value from the reference scenario.
///
/// ```json
/// {
///   "base_currency": "EUR",
///   "quote_currency": "GBP",
///   "tenor": "3m",
///   "spot": "0.85",
///   "forward_rate": "0.86",
///   "strike": "0.86",
///   "premium_pct": "0.02",
///   "notional": "1000000",
///   "grid": { "min": "0.80", "max": "0.95", "points": 16 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub base_currency: CurrencyCode,
    pub quote_currency: CurrencyCode,
    pub tenor: String,
    pub spot: Decimal,
    pub forward_rate: Decimal,
    pub strike: Decimal,
    pub premium_pct: Decimal,
    pub notional: Decimal,
    pub grid: GridConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        let reference = ScenarioParameters::reference();
        Self {
            base_currency: reference.pair().base.clone(),
            quote_currency: reference.pair().quote.clone(),
            tenor: reference.tenor().to_string(),
            spot: reference.spot(),
            forward_rate: reference.forward_rate(),
            strike: reference.strike(),
            premium_pct: reference.premium_pct(),
            notional: reference.notional(),
            grid: GridConfig::default(),
        }
    }
}

impl ScenarioConfig {
    /// Read a scenario from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&content)?;
        log::debug!("loaded scenario from {}", path.display());
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate into the parameters and grid the analysis runs on.
    pub fn build(&self) -> Result<(ScenarioParameters, RateGrid), ConfigError> {
        let params = ScenarioParameters::new(
            CurrencyPair::new(self.base_currency.clone(), self.quote_currency.clone()),
            self.tenor.clone(),
            self.spot,
            self.forward_rate,
            self.strike,
            self.premium_pct,
            self.notional,
        )?;
        let grid = RateGrid::linspace(self.grid.min, self.grid.max, self.grid.points)?;
        Ok((params, grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builds_reference_scenario() {
        let (params, grid) = ScenarioConfig::default().build().unwrap();
        assert_eq!(params, ScenarioParameters::reference());
        assert_eq!(grid, RateGrid::reference());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ScenarioConfig::from_json(r#"{ "strike": "0.88", "premium_pct": "0.01" }"#)
            .unwrap();
        assert_eq!(config.strike, dec!(0.88));
        assert_eq!(config.premium_pct, dec!(0.01));
        assert_eq!(config.spot, dec!(0.85));
        assert_eq!(config.grid.points, 16);
    }

    #[test]
    fn test_json_round_trip() {
        let config = ScenarioConfig::default();
        let json = config.to_json_pretty().unwrap();
        assert!(json.contains("\"forward_rate\": \"0.86\""));
        assert_eq!(ScenarioConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_values_surface_domain_error() {
        let config = ScenarioConfig::from_json(r#"{ "spot": "-0.85" }"#).unwrap();
        let err = config.build().unwrap_err();
        assert!(matches!(err, ConfigError::Domain(_)));
    }

    #[test]
    fn test_bad_grid_is_rejected() {
        let config =
            ScenarioConfig::from_json(r#"{ "grid": { "min": "0.9", "max": "0.8", "points": 4 } }"#)
                .unwrap();
        assert!(matches!(
            config.build(),
            Err(ConfigError::Domain(DomainError::InvalidGridBounds { .. }))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            ScenarioConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = ScenarioConfig::load("/nonexistent/scenario.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
