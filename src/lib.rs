//! Condition-monitoring core for delimited sensor logs.
//!
//! Raw text is parsed into a [`Table`], a signal column is picked (or
//! supplied by the caller), and the column is reduced to RMS, peak, a direct
//! DFT magnitude spectrum, z-score anomalies and a coarse [`HealthVerdict`].
//!
//! ```
//! use bridge_monitor::{analyze_default, parse_table, AnalysisConfig, HealthVerdict};
//!
//! let table = parse_table("time,vibration\n0,1.0\n1,2.0\n2,100.0\n3,1.5\n4,2.2");
//! let result = analyze_default(&table, &AnalysisConfig::default()).unwrap();
//! assert_eq!(result.column, "vibration");
//! assert_eq!(result.verdict, HealthVerdict::Normal);
//! ```

pub mod analysis;
pub mod config;
pub mod data;
pub mod report;
pub mod state;

pub use analysis::anomaly::{detect_anomalies, AnomalyRecord, DEFAULT_THRESHOLD};
pub use analysis::health::{classify_health, HealthVerdict};
pub use analysis::pipeline::{analyze, analyze_default, AnalysisResult};
pub use analysis::spectrum::{compute_spectrum, SpectralBin};
pub use analysis::stats::{compute_peak, compute_rms};
pub use config::{AnalysisConfig, ConfigError};
pub use data::coerce::coerce_column;
pub use data::loader::{load_file, parse_table};
pub use data::model::{NumericSeries, Row, Table};
pub use data::select::{select_default_column, ColumnRule};
pub use report::{render_report, write_report};
pub use state::{Session, SessionError};
