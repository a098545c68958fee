//! Insight threshold configuration
//!
//! Every cut-off the insight rules use lives here so deployments can tune
//! them without a rebuild. End users never see these values.
//!
//! ## Configuration Resolution
//!
//! 1. An explicit path passed by the caller (must exist)
//! 2. Override in data dir (~/.local/share/tally/config/insights.toml)
//! 3. Embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/insights.toml");

/// Upper bound for `anomaly.history_months` (ten years)
pub const MAX_HISTORY_MONTHS: u32 = 120;

/// Budget burn-rate thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurnRateConfig {
    /// Allowed lead of budget share over elapsed-time share (0.20 = 20 points)
    pub pace_slack: f64,
}

impl Default for BurnRateConfig {
    fn default() -> Self {
        Self { pace_slack: 0.20 }
    }
}

/// Category anomaly thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyConfig {
    /// Number of preceding months scanned for history
    pub history_months: u32,
    /// Minimum months with nonzero spend before a category is evaluated
    pub min_history_months: usize,
    /// Standard deviations above the mean that count as unusual
    pub std_dev_multiplier: f64,
    /// Absolute floor for the current-month category total
    pub min_amount: f64,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            history_months: 6,
            min_history_months: 3,
            std_dev_multiplier: 1.5,
            min_amount: 1000.0,
        }
    }
}

/// Month-over-month improvement thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImprovementConfig {
    /// The rule only runs once the day of month is past this value
    pub min_day_of_month: u32,
    /// Current total must be below previous total times this ratio
    pub max_ratio: f64,
}

impl Default for ImprovementConfig {
    fn default() -> Self {
        Self {
            min_day_of_month: 15,
            max_ratio: 0.80,
        }
    }
}

/// All insight thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    /// Prefix for amounts embedded in messages
    pub currency_symbol: String,
    pub burn_rate: BurnRateConfig,
    pub anomaly: AnomalyConfig,
    pub improvement: ImprovementConfig,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            burn_rate: BurnRateConfig::default(),
            anomaly: AnomalyConfig::default(),
            improvement: ImprovementConfig::default(),
        }
    }
}

impl InsightConfig {
    /// Resolve configuration: explicit path, then user override, then
    /// embedded defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        load_config(path)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        parse_config(content)
    }

    /// Serialize back to TOML (for `tally config show`)
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Check that every threshold is usable
    pub fn validate(&self) -> Result<()> {
        check_ratio("burn_rate.pace_slack", self.burn_rate.pace_slack)?;
        check_ratio(
            "anomaly.std_dev_multiplier",
            self.anomaly.std_dev_multiplier,
        )?;
        check_ratio("anomaly.min_amount", self.anomaly.min_amount)?;
        check_ratio("improvement.max_ratio", self.improvement.max_ratio)?;

        if self.anomaly.history_months == 0 {
            return Err(Error::Config(
                "anomaly.history_months must be at least 1".to_string(),
            ));
        }
        if self.anomaly.history_months > MAX_HISTORY_MONTHS {
            return Err(Error::Config(format!(
                "anomaly.history_months must be at most {}, got {}",
                MAX_HISTORY_MONTHS, self.anomaly.history_months
            )));
        }
        if self.anomaly.min_history_months == 0 {
            return Err(Error::Config(
                "anomaly.min_history_months must be at least 1".to_string(),
            ));
        }
        if self.anomaly.min_history_months > self.anomaly.history_months as usize {
            return Err(Error::Config(format!(
                "anomaly.min_history_months ({}) exceeds anomaly.history_months ({})",
                self.anomaly.min_history_months, self.anomaly.history_months
            )));
        }
        if self.improvement.min_day_of_month > 31 {
            return Err(Error::Config(format!(
                "improvement.min_day_of_month must be at most 31, got {}",
                self.improvement.min_day_of_month
            )));
        }
        Ok(())
    }
}

fn check_ratio(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "{} must be a non-negative number, got {}",
            name, value
        )))
    }
}

/// Get the default user override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("tally").join("config").join("insights.toml"))
}

/// Load configuration (explicit path, then override, then default)
fn load_config(explicit: Option<&Path>) -> Result<InsightConfig> {
    if let Some(path) = explicit {
        tracing::debug!(path = %path.display(), "Loading insight config");
        let content = fs::read_to_string(path)?;
        return parse_config(&content);
    }

    if let Some(default_path) = default_config_path() {
        if default_path.exists() {
            tracing::debug!(path = %default_path.display(), "Loading insight config override");
            let content = fs::read_to_string(&default_path)?;
            return parse_config(&content);
        }
    }

    tracing::debug!("Using embedded insight config");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(content: &str) -> Result<InsightConfig> {
    let config: InsightConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, InsightConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = InsightConfig::from_toml_str(
            r#"
            [anomaly]
            min_amount = 250.0
            "#,
        )
        .unwrap();

        assert_eq!(config.anomaly.min_amount, 250.0);
        assert_eq!(config.anomaly.history_months, 6);
        assert_eq!(config.burn_rate.pace_slack, 0.20);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = InsightConfig::from_toml_str("burn_rate = [").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_validation_rejects_bad_thresholds() {
        let err = InsightConfig::from_toml_str("[burn_rate]\npace_slack = -0.1").unwrap_err();
        assert!(err.to_string().contains("pace_slack"));

        let err = InsightConfig::from_toml_str("[anomaly]\nhistory_months = 0").unwrap_err();
        assert!(err.to_string().contains("history_months"));

        let err =
            InsightConfig::from_toml_str("[anomaly]\nhistory_months = 100000000").unwrap_err();
        assert!(err.to_string().contains("at most 120"));

        let err = InsightConfig::from_toml_str(
            "[anomaly]\nhistory_months = 2\nmin_history_months = 3",
        )
        .unwrap_err();
        assert!(err.to_string().contains("exceeds"));

        let err =
            InsightConfig::from_toml_str("[improvement]\nmin_day_of_month = 40").unwrap_err();
        assert!(err.to_string().contains("min_day_of_month"));
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "currency_symbol = \"NT$\"").unwrap();
        writeln!(file, "[improvement]").unwrap();
        writeln!(file, "max_ratio = 0.5").unwrap();

        let config = InsightConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.currency_symbol, "NT$");
        assert_eq!(config.improvement.max_ratio, 0.5);
        assert_eq!(config.improvement.min_day_of_month, 15);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = InsightConfig::load(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_toml_round_trip_for_display() {
        let text = InsightConfig::default().to_toml_string().unwrap();
        assert!(text.contains("pace_slack"));
        assert_eq!(
            InsightConfig::from_toml_str(&text).unwrap(),
            InsightConfig::default()
        );
    }
}
