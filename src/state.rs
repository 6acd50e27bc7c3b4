use std::collections::VecDeque;
use std::path::Path;

use anyhow::Result;
use thiserror::Error;

use crate::analysis::health::HealthVerdict;
use crate::analysis::pipeline::{analyze, AnalysisResult};
use crate::analysis::spectrum::SpectralBin;
use crate::config::AnalysisConfig;
use crate::data::loader::{load_file, parse_table};
use crate::data::model::{Row, Table};
use crate::data::select::select_column_with;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("column '{0}' is not in the loaded table")]
    UnknownColumn(String),
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Caller-held cache around the pure pipeline: the loaded table, the chosen
/// column, the latest result and a short message log. Holds no rendering
/// state.
pub struct Session {
    config: AnalysisConfig,

    /// Name of the loaded file (None until something is loaded).
    file_name: Option<String>,

    /// Parsed table; empty until loaded. Only replaced through a load, which
    /// always recomputes `result`.
    table: Table,

    /// Column the current result was computed for.
    selected_column: Option<String>,

    /// Latest analysis, replaced wholesale on every run.
    result: Option<AnalysisResult>,

    /// Messages, newest first, bounded by `config.message_capacity`.
    messages: VecDeque<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl Session {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            file_name: None,
            table: Table::default(),
            selected_column: None,
            result: None,
            messages: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn selected_column(&self) -> Option<&str> {
        self.selected_column.as_deref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Ingest raw text: parse, pick the default column and analyze it.
    pub fn load_text(&mut self, name: &str, text: &str) {
        self.file_name = Some(name.to_string());
        self.push_message(format!("Uploaded file {name}"));

        let table = parse_table(text);
        self.push_message(format!(
            "Parsed CSV with {} rows and {} columns",
            table.len(),
            table.width()
        ));
        self.set_table(table);
    }

    /// Read a file from disk and ingest it. Only I/O failures are errors.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let table = match load_file(path) {
            Ok(table) => table,
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.push_message(format!("Error loading file: {e:#}"));
                return Err(e);
            }
        };
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.file_name = Some(name.clone());
        self.push_message(format!("Uploaded file {name}"));
        self.push_message(format!(
            "Parsed CSV with {} rows and {} columns",
            table.len(),
            table.width()
        ));
        self.set_table(table);
        Ok(())
    }

    fn set_table(&mut self, table: Table) {
        self.table = table;
        self.selected_column = select_column_with(&self.table.header, &self.config.column_rules);
        log::info!(
            "Loaded {} rows with columns {:?}",
            self.table.len(),
            self.table.header
        );
        self.rerun();
    }

    /// Explicitly choose the signal column and recompute everything for it.
    pub fn select_column(&mut self, column: &str) -> Result<(), SessionError> {
        if !self.table.has_column(column) {
            return Err(SessionError::UnknownColumn(column.to_string()));
        }
        self.selected_column = Some(column.to_string());
        self.rerun();
        Ok(())
    }

    /// Recompute the analysis for the current column. No-op without data.
    pub fn rerun(&mut self) {
        let Some(column) = self.selected_column.clone() else {
            self.result = None;
            return;
        };
        let result = analyze(&self.table, &column, &self.config);
        if result.invalid_count() > 0 {
            self.push_message(format!(
                "{} missing or non-numeric values found in column {column}",
                result.invalid_count()
            ));
        }
        self.push_message(format!("Processing complete - status: {}", result.verdict));
        self.result = Some(result);
    }

    /// Forget the table, selection, result and messages.
    pub fn clear(&mut self) {
        self.file_name = None;
        self.table = Table::default();
        self.selected_column = None;
        self.result = None;
        self.messages.clear();
    }

    /// Current verdict; `unknown` until a result exists.
    pub fn health(&self) -> HealthVerdict {
        self.result
            .as_ref()
            .map(|r| r.verdict)
            .unwrap_or(HealthVerdict::Unknown)
    }

    /// Spectrum bins to chart, capped at `config.max_display_bins`.
    pub fn display_spectrum(&self) -> &[SpectralBin] {
        self.result
            .as_ref()
            .map(|r| r.display_spectrum(&self.config))
            .unwrap_or_default()
    }

    /// Leading rows for a preview table.
    pub fn preview(&self) -> &[Row] {
        self.table.preview(self.config.preview_rows)
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    fn push_message(&mut self, message: String) {
        self.messages.push_front(message);
        self.messages.truncate(self.config.message_capacity);
    }
}
