use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// HealthVerdict
// ---------------------------------------------------------------------------

/// Coarse condition label derived from the signal metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthVerdict {
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
    #[serde(rename = "Critical")]
    Critical,
    /// No valid samples, so amplitude rules cannot be evaluated.
    #[serde(rename = "unknown")]
    Unknown,
}

impl HealthVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthVerdict::Normal => "Normal",
            HealthVerdict::NeedsAttention => "Needs Attention",
            HealthVerdict::Critical => "Critical",
            HealthVerdict::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HealthVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Minimum anomaly count that can ever trigger attention.
const MIN_ANOMALY_BUDGET: f64 = 5.0;
/// Fraction of the series length tolerated as anomalies.
const ANOMALY_FRACTION: f64 = 0.01;
/// Crest factor (peak / RMS) above which the signal needs attention.
const ATTENTION_CREST: f64 = 10.0;
/// Crest factor above which the signal is critical.
const CRITICAL_CREST: f64 = 20.0;

/// Classify from anomaly count, series length, peak and RMS.
///
/// * `Unknown` if either metric is undefined or not finite.
/// * `Needs Attention` if anomalies exceed `max(5, 1% of length)` or
///   peak > 10 × RMS.
/// * `Critical` if peak > 20 × RMS, regardless of the above.
pub fn classify_health(
    anomaly_count: usize,
    series_len: usize,
    peak: Option<f64>,
    rms: Option<f64>,
) -> HealthVerdict {
    let (Some(peak), Some(rms)) = (peak, rms) else {
        return HealthVerdict::Unknown;
    };
    if !peak.is_finite() || !rms.is_finite() {
        return HealthVerdict::Unknown;
    }

    let anomaly_budget = MIN_ANOMALY_BUDGET.max(series_len as f64 * ANOMALY_FRACTION);

    let mut verdict = HealthVerdict::Normal;
    if anomaly_count as f64 > anomaly_budget || peak > rms * ATTENTION_CREST {
        verdict = HealthVerdict::NeedsAttention;
    }
    if peak > rms * CRITICAL_CREST {
        verdict = HealthVerdict::Critical;
    }
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_signal_is_normal() {
        assert_eq!(classify_health(0, 100, Some(5.0), Some(1.0)), HealthVerdict::Normal);
    }

    #[test]
    fn crest_factor_escalates() {
        assert_eq!(
            classify_health(0, 100, Some(11.0), Some(1.0)),
            HealthVerdict::NeedsAttention
        );
        assert_eq!(classify_health(0, 100, Some(10.0), Some(1.0)), HealthVerdict::Normal);
        assert_eq!(classify_health(0, 100, Some(21.0), Some(1.0)), HealthVerdict::Critical);
    }

    #[test]
    fn anomaly_budget_is_at_least_five() {
        assert_eq!(classify_health(5, 100, Some(1.0), Some(1.0)), HealthVerdict::Normal);
        assert_eq!(
            classify_health(6, 100, Some(1.0), Some(1.0)),
            HealthVerdict::NeedsAttention
        );
    }

    #[test]
    fn anomaly_budget_scales_with_length() {
        assert_eq!(classify_health(10, 1000, Some(1.0), Some(1.0)), HealthVerdict::Normal);
        assert_eq!(
            classify_health(11, 1000, Some(1.0), Some(1.0)),
            HealthVerdict::NeedsAttention
        );
    }

    #[test]
    fn critical_overrides_attention() {
        assert_eq!(classify_health(50, 100, Some(25.0), Some(1.0)), HealthVerdict::Critical);
    }

    #[test]
    fn undefined_metrics_are_unknown_not_normal() {
        assert_eq!(classify_health(0, 0, None, None), HealthVerdict::Unknown);
        assert_eq!(classify_health(0, 3, Some(1.0), None), HealthVerdict::Unknown);
        assert_eq!(classify_health(0, 3, None, Some(1.0)), HealthVerdict::Unknown);
        assert_eq!(
            classify_health(0, 3, Some(f64::NAN), Some(1.0)),
            HealthVerdict::Unknown
        );
        assert_eq!(
            classify_health(0, 3, Some(1e200), Some(f64::INFINITY)),
            HealthVerdict::Unknown
        );
    }

    #[test]
    fn huge_samples_still_classify() {
        use crate::analysis::stats::{compute_peak, compute_rms};
        use crate::data::model::NumericSeries;

        let mut values = vec![1e198; 999];
        values.push(1e200 * 3.0);
        let series = NumericSeries::new(values);
        let verdict = classify_health(
            0,
            series.len(),
            compute_peak(&series),
            compute_rms(&series),
        );
        // rms ≈ 9.54e198, peak 3e200 > 20 × rms.
        assert_eq!(verdict, HealthVerdict::Critical);
    }

    #[test]
    fn labels_render_and_serialize() {
        assert_eq!(HealthVerdict::NeedsAttention.to_string(), "Needs Attention");
        assert_eq!(HealthVerdict::Unknown.to_string(), "unknown");
        assert_eq!(
            serde_json::to_string(&HealthVerdict::Critical).unwrap(),
            "\"Critical\""
        );
    }
}
