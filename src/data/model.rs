use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Row – one data line of the source file
// ---------------------------------------------------------------------------

/// A single data row. Cells are stored positionally and always padded or
/// truncated to the header width of the owning [`Table`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub cells: Vec<String>,
}

impl Row {
    /// Build a row aligned to `width` columns: missing trailing cells become
    /// empty strings, surplus cells are dropped.
    pub fn aligned(mut cells: Vec<String>, width: usize) -> Self {
        cells.resize(width, String::new());
        Row { cells }
    }

    /// Cell at a header position, or `""` when out of range.
    pub fn get(&self, idx: usize) -> &str {
        self.cells.get(idx).map(String::as_str).unwrap_or("")
    }
}

// ---------------------------------------------------------------------------
// Table – the complete parsed file
// ---------------------------------------------------------------------------

/// Header plus rows, as parsed from delimited text.
///
/// Header names are not deduplicated; name lookups resolve to the first
/// positional match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Position of the first header entry equal to `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// Whether `name` appears in the header.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Raw cell for `(row, column)`; empty when the column is absent.
    pub fn cell(&self, row: usize, column: &str) -> &str {
        match (self.rows.get(row), self.column_index(column)) {
            (Some(r), Some(idx)) => r.get(idx),
            _ => "",
        }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of header columns.
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// The first `n` rows, for previews.
    pub fn preview(&self, n: usize) -> &[Row] {
        &self.rows[..n.min(self.rows.len())]
    }
}

// ---------------------------------------------------------------------------
// NumericSeries – one coerced column
// ---------------------------------------------------------------------------

/// Floating-point samples index-aligned with the table rows.
///
/// Cells that failed to parse are kept as `NaN` so positions stay aligned;
/// every consumer must treat `NaN` as "invalid", never as a value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NumericSeries {
    #[serde(serialize_with = "serialize_markers")]
    values: Vec<f64>,
    invalid_count: usize,
}

impl NumericSeries {
    /// Wrap raw samples, normalising any non-finite entry to the `NaN` marker.
    pub fn new(values: Vec<f64>) -> Self {
        let values: Vec<f64> = values
            .into_iter()
            .map(|v| if v.is_finite() { v } else { f64::NAN })
            .collect();
        let invalid_count = values.iter().filter(|v| v.is_nan()).count();
        NumericSeries {
            values,
            invalid_count,
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterator over valid samples only.
    pub fn valid(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied().filter(|v| !v.is_nan())
    }

    /// Number of entries that are not valid numbers.
    pub fn invalid_count(&self) -> usize {
        self.invalid_count
    }

    pub fn valid_count(&self) -> usize {
        self.values.len() - self.invalid_count
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(index, value)` pairs of valid samples, for line charts.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_nan())
            .map(|(i, &v)| [i as f64, v])
            .collect()
    }
}

// Markers are canonical NaNs, so bitwise equality treats them as equal.
impl PartialEq for NumericSeries {
    fn eq(&self, other: &Self) -> bool {
        self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl From<Vec<f64>> for NumericSeries {
    fn from(values: Vec<f64>) -> Self {
        NumericSeries::new(values)
    }
}

/// Markers are written as `null` instead of relying on the JSON backend.
fn serialize_markers<S: Serializer>(values: &[f64], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(values.iter().map(|v| if v.is_nan() { None } else { Some(*v) }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_is_padded_and_truncated_to_width() {
        let short = Row::aligned(vec!["1".into()], 3);
        assert_eq!(short.cells, vec!["1", "", ""]);

        let long = Row::aligned(vec!["1".into(), "2".into(), "3".into()], 2);
        assert_eq!(long.cells, vec!["1", "2"]);
    }

    #[test]
    fn duplicate_header_resolves_to_first_position() {
        let table = Table {
            header: vec!["a".into(), "a".into()],
            rows: vec![Row::aligned(vec!["first".into(), "second".into()], 2)],
        };
        assert_eq!(table.column_index("a"), Some(0));
        assert_eq!(table.cell(0, "a"), "first");
        assert_eq!(table.cell(0, "missing"), "");
        assert_eq!(table.cell(5, "a"), "");
    }

    #[test]
    fn series_counts_markers_and_normalises_infinities() {
        let series = NumericSeries::new(vec![1.0, f64::NAN, f64::INFINITY, -2.0]);
        assert_eq!(series.len(), 4);
        assert_eq!(series.invalid_count(), 2);
        assert_eq!(series.valid_count(), 2);
        assert!(series.values()[2].is_nan());
        assert_eq!(series.valid().collect::<Vec<_>>(), vec![1.0, -2.0]);
        assert_eq!(series.points(), vec![[0.0, 1.0], [3.0, -2.0]]);
    }

    #[test]
    fn series_with_markers_compare_equal() {
        let a = NumericSeries::new(vec![1.0, f64::NAN]);
        let b = NumericSeries::new(vec![1.0, f64::INFINITY]);
        assert_eq!(a, b);
        assert_ne!(a, NumericSeries::new(vec![1.0, 2.0]));
    }

    #[test]
    fn markers_serialize_as_null() {
        let series = NumericSeries::new(vec![1.5, f64::NAN]);
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json["values"], serde_json::json!([1.5, null]));
        assert_eq!(json["invalid_count"], 1);
    }
}
