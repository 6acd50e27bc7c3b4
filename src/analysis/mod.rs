/// Analysis layer: metrics computed over a [`NumericSeries`](crate::data::model::NumericSeries).
///
/// ```text
///                 NumericSeries
///        ┌──────────────┼──────────────┐
///        ▼              ▼              ▼
///   ┌─────────┐   ┌──────────┐   ┌──────────┐
///   │  stats  │   │ spectrum │   │ anomaly  │
///   └─────────┘   └──────────┘   └──────────┘
///        │                             │
///        └──────────────┬──────────────┘
///                       ▼
///                 ┌──────────┐
///                 │  health  │  → HealthVerdict
///                 └──────────┘
/// ```
///
/// Every stage is a pure function; [`pipeline`] wires them into one
/// immutable [`AnalysisResult`](pipeline::AnalysisResult).

pub mod anomaly;
pub mod health;
pub mod pipeline;
pub mod spectrum;
pub mod stats;
