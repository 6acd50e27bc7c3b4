use serde::{Deserialize, Serialize};

use super::stats::population_moments;
use crate::data::model::NumericSeries;

/// Default z-score threshold, in standard deviations.
pub const DEFAULT_THRESHOLD: f64 = 3.0;

/// A sample whose standardized deviation exceeded the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    /// Position in the original series (markers included).
    pub index: usize,
    pub value: f64,
    /// |value − mean| / std.
    pub z: f64,
}

/// Flag every valid sample with z-score strictly above `threshold`.
///
/// Mean and population std come from valid samples only. Records keep the
/// original series order and indices. A constant signal (std == 0) scores
/// zero everywhere and is never flagged, whatever the threshold. The
/// threshold is used as given otherwise: a negative value flags every valid
/// sample of a non-flat signal, a `NaN` flags nothing.
pub fn detect_anomalies(series: &NumericSeries, threshold: f64) -> Vec<AnomalyRecord> {
    let Some(moments) = population_moments(series) else {
        return Vec::new();
    };
    if moments.std_dev == 0.0 {
        return Vec::new();
    }

    series
        .values()
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_nan())
        .filter_map(|(index, &value)| {
            let z = (value - moments.mean).abs() / moments.std_dev;
            (z > threshold).then_some(AnomalyRecord { index, value, z })
        })
        .collect()
}
