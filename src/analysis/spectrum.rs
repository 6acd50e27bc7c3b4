//! Direct discrete Fourier transform.
//!
//! The transform is evaluated by plain summation over every sample, O(n²),
//! and is only meant for bounded log sizes. No windowing is applied.
//!
//! Invalid samples (the `NaN` marker) are substituted with `0.0` before the
//! transform so a single gap cannot poison every bin. The number of
//! substituted samples is available through [`substituted_samples`].

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::data::model::NumericSeries;

/// One retained frequency bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralBin {
    /// Frequency index `k`, in cycles per series length.
    pub frequency: usize,
    pub magnitude: f64,
}

/// Magnitude spectrum for `k = 0 .. n/2` (floor), in ascending order.
///
/// For real input the upper half mirrors the lower one and is not returned.
pub fn compute_spectrum(series: &NumericSeries) -> Vec<SpectralBin> {
    let samples: Vec<f64> = series
        .values()
        .iter()
        .map(|&v| if v.is_nan() { 0.0 } else { v })
        .collect();
    let n = samples.len();
    let half = n / 2;
    let mut bins = Vec::with_capacity(half);

    for k in 0..half {
        let mut re = 0.0;
        let mut im = 0.0;
        for (t, &x) in samples.iter().enumerate() {
            // Reduce t·k modulo n to keep the angle small and exact.
            let angle = 2.0 * PI * ((t * k) % n) as f64 / n as f64;
            re += x * angle.cos();
            im -= x * angle.sin();
        }
        bins.push(SpectralBin {
            frequency: k,
            magnitude: (re * re + im * im).sqrt(),
        });
    }

    bins
}

/// How many samples [`compute_spectrum`] replaced with zero.
pub fn substituted_samples(series: &NumericSeries) -> usize {
    series.invalid_count()
}

/// Bin with the largest magnitude, ignoring the DC component.
pub fn dominant_bin(spectrum: &[SpectralBin]) -> Option<SpectralBin> {
    spectrum
        .iter()
        .skip(1)
        .copied()
        .max_by(|a, b| a.magnitude.total_cmp(&b.magnitude))
}
