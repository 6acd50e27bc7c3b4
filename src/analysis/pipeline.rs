use anyhow::{Context, Result};
use serde::Serialize;

use super::anomaly::{detect_anomalies, AnomalyRecord};
use super::health::{classify_health, HealthVerdict};
use super::spectrum::{compute_spectrum, substituted_samples, SpectralBin};
use super::stats::{compute_peak, compute_rms};
use crate::config::AnalysisConfig;
use crate::data::coerce::coerce_column;
use crate::data::model::{NumericSeries, Table};
use crate::data::select::select_column_with;

// ---------------------------------------------------------------------------
// AnalysisResult
// ---------------------------------------------------------------------------

/// Everything derived from one (table, column, threshold) triple.
///
/// Built from scratch on every call; nothing is updated incrementally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub column: String,
    pub series: NumericSeries,
    pub rms: Option<f64>,
    pub peak: Option<f64>,
    /// Full half-spectrum; see [`AnalysisResult::display_spectrum`].
    pub spectrum: Vec<SpectralBin>,
    pub anomalies: Vec<AnomalyRecord>,
    pub verdict: HealthVerdict,
    /// Informational messages; never indicate a failed run.
    pub diagnostics: Vec<String>,
}

impl AnalysisResult {
    pub fn sample_count(&self) -> usize {
        self.series.len()
    }

    pub fn invalid_count(&self) -> usize {
        self.series.invalid_count()
    }

    /// Leading spectrum bins, at most `config.max_display_bins`.
    pub fn display_spectrum(&self, config: &AnalysisConfig) -> &[SpectralBin] {
        let limit = config.max_display_bins.min(self.spectrum.len());
        &self.spectrum[..limit]
    }

    /// Leading anomaly records, at most `config.max_listed_anomalies`.
    pub fn listed_anomalies(&self, config: &AnalysisConfig) -> &[AnomalyRecord] {
        let limit = config.max_listed_anomalies.min(self.anomalies.len());
        &self.anomalies[..limit]
    }

    /// `(index, value)` points of the valid samples.
    pub fn time_series(&self) -> Vec<[f64; 2]> {
        self.series.points()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serializing analysis result")
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Run the full analysis for an explicitly chosen column.
pub fn analyze(table: &Table, column: &str, config: &AnalysisConfig) -> AnalysisResult {
    let series = coerce_column(table, column);

    let mut diagnostics = Vec::new();
    if !table.has_column(column) {
        diagnostics.push(format!("column {column} not found in header"));
    }
    if series.invalid_count() > 0 {
        diagnostics.push(format!(
            "{} missing or non-numeric values found in column {column}",
            series.invalid_count()
        ));
    }

    let rms = compute_rms(&series);
    let peak = compute_peak(&series);
    let spectrum = compute_spectrum(&series);
    let substituted = substituted_samples(&series);
    if substituted > 0 && !spectrum.is_empty() {
        diagnostics.push(format!(
            "{substituted} invalid samples treated as zero in the spectrum"
        ));
    }
    let anomalies = detect_anomalies(&series, config.anomaly_threshold);
    let verdict = classify_health(anomalies.len(), series.len(), peak, rms);

    log::info!(
        "analyzed column {column}: {} samples, {} anomalies, status {verdict}",
        series.len(),
        anomalies.len()
    );

    AnalysisResult {
        column: column.to_string(),
        series,
        rms,
        peak,
        spectrum,
        anomalies,
        verdict,
        diagnostics,
    }
}

/// Run the analysis on the heuristically selected column.
///
/// `None` when the table has no header, i.e. there is no data to analyze.
pub fn analyze_default(table: &Table, config: &AnalysisConfig) -> Option<AnalysisResult> {
    let column = select_column_with(&table.header, &config.column_rules)?;
    Some(analyze(table, &column, config))
}
