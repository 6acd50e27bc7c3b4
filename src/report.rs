use std::fmt::{self, Write};

use crate::analysis::pipeline::AnalysisResult;
use crate::analysis::spectrum::dominant_bin;
use crate::config::AnalysisConfig;

/// Shown wherever a metric is undefined.
pub const PLACEHOLDER: &str = "—";

/// Format an optional metric with three decimals, or the placeholder.
pub fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.3}"),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Plain-text condition report for one analysis run.
pub fn render_report(
    file_name: Option<&str>,
    result: &AnalysisResult,
    config: &AnalysisConfig,
) -> String {
    Report {
        file_name,
        result,
        config,
    }
    .to_string()
}

/// Write the report into any `fmt::Write` sink.
pub fn write_report(
    out: &mut impl Write,
    file_name: Option<&str>,
    result: &AnalysisResult,
    config: &AnalysisConfig,
) -> fmt::Result {
    writeln!(out, "Bridge Health Report")?;
    writeln!(out, "Source: {}", file_name.unwrap_or("report"))?;
    writeln!(out, "Column: {}", result.column)?;
    writeln!(
        out,
        "Samples: {} ({} invalid)",
        result.sample_count(),
        result.invalid_count()
    )?;
    writeln!(out)?;
    writeln!(out, "RMS: {}", format_metric(result.rms))?;
    writeln!(out, "Peak: {}", format_metric(result.peak))?;
    match dominant_bin(&result.spectrum) {
        Some(bin) => writeln!(
            out,
            "Dominant frequency bin: {} (magnitude {:.3})",
            bin.frequency, bin.magnitude
        )?,
        None => writeln!(out, "Dominant frequency bin: {PLACEHOLDER}")?,
    }
    writeln!(out, "Condition: {}", result.verdict)?;
    writeln!(out, "Anomalies: {}", result.anomalies.len())?;
    writeln!(out)?;
    writeln!(out, "Detected issues:")?;

    let listed = result.listed_anomalies(config);
    if listed.is_empty() {
        writeln!(out, "- No anomalous activity detected in the selected column.")?;
    }
    for a in listed {
        writeln!(
            out,
            "- Sample at index {} shows an unusual amplitude {:.3} (z={:.2})",
            a.index, a.value, a.z
        )?;
    }
    if result.anomalies.len() > listed.len() {
        writeln!(out, "- ... and {} more", result.anomalies.len() - listed.len())?;
    }

    writeln!(out)?;
    write!(out, "Overall health: {}", result.verdict)
}

struct Report<'a> {
    file_name: Option<&'a str>,
    result: &'a AnalysisResult,
    config: &'a AnalysisConfig,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(f, self.file_name, self.result, self.config)
    }
}
