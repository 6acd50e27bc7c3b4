/// Data layer: table model, parsing, column selection and numeric coercion.
///
/// Architecture:
/// ```text
///  raw text (.csv / .tsv / mixed)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  split lines/cells → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  select   │  header heuristic → column name (overridable)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  coerce   │  column cells → NumericSeries (NaN markers kept in place)
///   └──────────┘
/// ```

pub mod coerce;
pub mod loader;
pub mod model;
pub mod select;
