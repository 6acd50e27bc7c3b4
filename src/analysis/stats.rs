use crate::data::model::NumericSeries;

// ---------------------------------------------------------------------------
// Amplitude metrics
// ---------------------------------------------------------------------------

/// Root-mean-square over valid samples; `None` when there are none.
///
/// Samples are divided by the peak before squaring so values near
/// `f64::MAX` cannot overflow to infinity.
pub fn compute_rms(series: &NumericSeries) -> Option<f64> {
    let peak = compute_peak(series)?;
    if peak == 0.0 {
        return Some(0.0);
    }
    let (count, sum_sq) = series.valid().fold((0usize, 0.0f64), |(n, acc), v| {
        let scaled = v / peak;
        (n + 1, acc + scaled * scaled)
    });
    let rms = peak * (sum_sq / count as f64).sqrt();
    rms.is_finite().then_some(rms)
}

/// Largest absolute valid sample; `None` when there are none.
pub fn compute_peak(series: &NumericSeries) -> Option<f64> {
    series.valid().map(f64::abs).reduce(f64::max)
}

// ---------------------------------------------------------------------------
// Moments
// ---------------------------------------------------------------------------

/// Mean and population standard deviation of the valid samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub mean: f64,
    pub std_dev: f64,
}

/// Population moments (variance divides by the count, not count − 1).
///
/// Computed on peak-scaled samples for the same overflow reason as
/// [`compute_rms`].
pub fn population_moments(series: &NumericSeries) -> Option<Moments> {
    let peak = compute_peak(series)?;
    let scale = if peak == 0.0 { 1.0 } else { peak };
    let n = series.valid_count() as f64;
    let mean = series.valid().map(|v| v / scale).sum::<f64>() / n;
    let variance = series
        .valid()
        .map(|v| (v / scale - mean).powi(2))
        .sum::<f64>()
        / n;
    Some(Moments {
        mean: mean * scale,
        std_dev: variance.sqrt() * scale,
    })
}
