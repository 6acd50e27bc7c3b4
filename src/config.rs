use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::anomaly::DEFAULT_THRESHOLD;
use crate::data::select::{default_rules, ColumnRule};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("anomaly threshold must be a positive finite number, got {0}")]
    InvalidThreshold(f64),

    #[error("{0} must be greater than zero")]
    ZeroLimit(&'static str),

    #[error("column rule #{0} has an empty pattern")]
    EmptyPattern(usize),
}

// ---------------------------------------------------------------------------
// AnalysisConfig
// ---------------------------------------------------------------------------

/// Tunables for the analysis pipeline and its presentation helpers.
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```json
/// { "anomaly_threshold": 2.5, "column_rules": [{ "pattern": "strain", "priority": 1 }] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// z-score above which a sample is reported as an anomaly.
    pub anomaly_threshold: f64,
    /// Spectrum bins handed to chart consumers.
    pub max_display_bins: usize,
    /// Anomaly records listed in reports.
    pub max_listed_anomalies: usize,
    /// Rows shown in a table preview.
    pub preview_rows: usize,
    /// Messages kept in a session log.
    pub message_capacity: usize,
    /// Ordered signal-column heuristics.
    pub column_rules: Vec<ColumnRule>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            anomaly_threshold: DEFAULT_THRESHOLD,
            max_display_bins: 200,
            max_listed_anomalies: 10,
            preview_rows: 10,
            message_capacity: 10,
            column_rules: default_rules(),
        }
    }
}

impl AnalysisConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: AnalysisConfig =
            serde_json::from_str(text).context("parsing analysis config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !self.anomaly_threshold.is_finite() || self.anomaly_threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(self.anomaly_threshold));
        }
        for (name, value) in [
            ("max_display_bins", self.max_display_bins),
            ("max_listed_anomalies", self.max_listed_anomalies),
            ("preview_rows", self.preview_rows),
            ("message_capacity", self.message_capacity),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroLimit(name));
            }
        }
        if let Some(idx) = self
            .column_rules
            .iter()
            .position(|r| r.pattern.trim().is_empty())
        {
            return Err(ConfigError::EmptyPattern(idx));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AnalysisConfig::default();
        assert_eq!(config.anomaly_threshold, 3.0);
        assert_eq!(config.max_display_bins, 200);
        assert_eq!(config.column_rules.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AnalysisConfig::from_json_str(r#"{ "anomaly_threshold": 2.5 }"#).unwrap();
        assert_eq!(config.anomaly_threshold, 2.5);
        assert_eq!(config.preview_rows, 10);
        assert_eq!(config.column_rules, default_rules());
    }

    #[test]
    fn custom_rules_default_priority_to_zero() {
        let config =
            AnalysisConfig::from_json_str(r#"{ "column_rules": [{ "pattern": "strain" }] }"#)
                .unwrap();
        assert_eq!(config.column_rules, vec![ColumnRule::new("strain", 0)]);
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = AnalysisConfig::default();
        config.anomaly_threshold = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidThreshold(-1.0)));

        let mut config = AnalysisConfig::default();
        config.max_display_bins = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroLimit("max_display_bins")));

        let mut config = AnalysisConfig::default();
        config.column_rules.push(ColumnRule::new("  ", 0));
        assert_eq!(config.validate(), Err(ConfigError::EmptyPattern(5)));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(AnalysisConfig::from_json_str("{ not json").is_err());
        assert!(AnalysisConfig::from_json_str(r#"{ "anomaly_threshold": 0 }"#).is_err());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.json");
        std::fs::write(&path, r#"{ "max_listed_anomalies": 3 }"#).unwrap();
        assert_eq!(AnalysisConfig::load(&path).unwrap().max_listed_anomalies, 3);
    }
}
