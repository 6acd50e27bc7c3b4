use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Column rules: which header names look like the signal of interest
// ---------------------------------------------------------------------------

/// A case-insensitive substring rule. Among matching headers the highest
/// `priority` wins; equal priorities fall back to header order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRule {
    pub pattern: String,
    #[serde(default)]
    pub priority: u32,
}

impl ColumnRule {
    pub fn new(pattern: &str, priority: u32) -> Self {
        ColumnRule {
            pattern: pattern.to_lowercase(),
            priority,
        }
    }

    fn matches(&self, lowered_header: &str) -> bool {
        lowered_header.contains(&self.pattern.to_lowercase())
    }
}

/// The stock vibration-sensor patterns, all at equal priority so the first
/// matching header wins.
pub fn default_rules() -> Vec<ColumnRule> {
    ["vib", "acc", "sensor", "amplitude", "value"]
        .iter()
        .map(|p| ColumnRule::new(p, 0))
        .collect()
}

/// Pick the default signal column from a header using the stock rules.
///
/// Returns `None` only for an empty header; otherwise falls back to the first
/// column when nothing matches.
pub fn select_default_column(header: &[String]) -> Option<String> {
    select_column_with(header, &default_rules())
}

/// Like [`select_default_column`] but with caller-supplied rules.
pub fn select_column_with(header: &[String], rules: &[ColumnRule]) -> Option<String> {
    if header.is_empty() {
        return None;
    }

    let mut best: Option<(u32, usize)> = None;
    for (idx, name) in header.iter().enumerate() {
        let lowered = name.to_lowercase();
        let Some(priority) = rules
            .iter()
            .filter(|r| r.matches(&lowered))
            .map(|r| r.priority)
            .max()
        else {
            continue;
        };
        // Strictly greater keeps the earliest header on ties.
        if best.map_or(true, |(p, _)| priority > p) {
            best = Some((priority, idx));
        }
    }

    let idx = best.map(|(_, idx)| idx).unwrap_or(0);
    log::debug!(
        "selected column '{}' ({})",
        header[idx],
        if best.is_some() { "pattern match" } else { "fallback to first" }
    );
    Some(header[idx].clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn picks_first_matching_header() {
        let h = header(&["time", "Temperature", "Vibration_X", "accel_y"]);
        assert_eq!(select_default_column(&h).as_deref(), Some("Vibration_X"));
    }

    #[test]
    fn match_is_a_case_insensitive_substring() {
        let h = header(&["timestamp", "RAW_VALUES"]);
        assert_eq!(select_default_column(&h).as_deref(), Some("RAW_VALUES"));

        // "accuracy" contains "acc": not whole-word.
        let h = header(&["id", "accuracy", "vib"]);
        assert_eq!(select_default_column(&h).as_deref(), Some("accuracy"));
    }

    #[test]
    fn falls_back_to_first_column() {
        let h = header(&["time", "temp"]);
        assert_eq!(select_default_column(&h).as_deref(), Some("time"));
    }

    #[test]
    fn empty_header_selects_nothing() {
        assert_eq!(select_default_column(&[]), None);
    }

    #[test]
    fn higher_priority_rule_beats_header_order() {
        let rules = vec![ColumnRule::new("value", 0), ColumnRule::new("Strain", 5)];
        let h = header(&["value", "strain_gauge"]);
        assert_eq!(
            select_column_with(&h, &rules).as_deref(),
            Some("strain_gauge")
        );
    }
}
