use super::model::{NumericSeries, Table};

/// Convert one column of `table` into a [`NumericSeries`].
///
/// The result always has one entry per row. Cells that are empty, not
/// numeric, or not finite become the `NaN` marker; an absent column yields
/// an all-marker series.
pub fn coerce_column(table: &Table, column: &str) -> NumericSeries {
    let idx = table.column_index(column);
    let values: Vec<f64> = table
        .rows
        .iter()
        .map(|row| idx.map(|i| row.get(i)).unwrap_or(""))
        .map(parse_cell)
        .collect();

    let series = NumericSeries::new(values);
    if series.invalid_count() > 0 {
        log::warn!(
            "{} missing or non-numeric values found in column {}",
            series.invalid_count(),
            column
        );
    }
    series
}

/// Parse a single cell; anything that is not a finite number is `NaN`.
pub fn parse_cell(cell: &str) -> f64 {
    match cell.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_table;

    #[test]
    fn parses_numeric_forms() {
        assert_eq!(parse_cell("1.5"), 1.5);
        assert_eq!(parse_cell(" -2 "), -2.0);
        assert_eq!(parse_cell("1e3"), 1000.0);
        assert_eq!(parse_cell(".5"), 0.5);
        assert_eq!(parse_cell("+4"), 4.0);
    }

    #[test]
    fn rejects_non_finite_and_text() {
        for cell in ["", "abc", "inf", "-Infinity", "NaN", "1,5", "12kg"] {
            assert!(parse_cell(cell).is_nan(), "{cell:?} should be a marker");
        }
    }

    #[test]
    fn length_matches_rows_and_markers_stay_in_place() {
        let table = parse_table("t,vib\n0,1\n1,\n2,x\n3,4");
        let series = coerce_column(&table, "vib");
        assert_eq!(series.len(), table.len());
        assert_eq!(series.invalid_count(), 2);
        assert_eq!(series.values()[0], 1.0);
        assert!(series.values()[1].is_nan());
        assert!(series.values()[2].is_nan());
        assert_eq!(series.values()[3], 4.0);
    }

    #[test]
    fn missing_column_is_all_markers() {
        let table = parse_table("t,vib\n0,1\n1,2");
        let series = coerce_column(&table, "pressure");
        assert_eq!(series.len(), 2);
        assert_eq!(series.invalid_count(), 2);
    }

    #[test]
    fn short_row_cell_is_a_marker() {
        let table = parse_table("t,vib\n0\n1,2");
        let series = coerce_column(&table, "vib");
        assert!(series.values()[0].is_nan());
        assert_eq!(series.values()[1], 2.0);
    }
}
