use std::path::Path;

use anyhow::{Context, Result};

use super::model::{Row, Table};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Cell separators. Every occurrence of any of them splits a line, so a file
/// may mix delimiters from one line to the next.
const DELIMITERS: [char; 3] = [',', ';', '\t'];

/// Parse delimited text into a [`Table`].
///
/// Never fails: empty or whitespace-only input yields an empty table, short
/// rows are padded with empty cells and surplus cells are discarded.
pub fn parse_table(text: &str) -> Table {
    let text = text.trim();
    if text.is_empty() {
        return Table::default();
    }

    let mut lines = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line));

    let header = match lines.next() {
        Some(line) => split_cells(line),
        None => return Table::default(),
    };
    let width = header.len();
    let rows: Vec<Row> = lines
        .map(|line| Row::aligned(split_cells(line), width))
        .collect();

    log::debug!("parsed table: {} columns, {} rows", width, rows.len());
    Table { header, rows }
}

/// Read a file and parse it with [`parse_table`].
///
/// Only I/O failures are errors; invalid UTF-8 is replaced rather than
/// rejected so malformed content still degrades to a (possibly odd) table.
pub fn load_file(path: &Path) -> Result<Table> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("reading sensor log {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(parse_table(&text))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn split_cells(line: &str) -> Vec<String> {
    line.split(&DELIMITERS[..])
        .map(|c| c.trim().to_string())
        .collect()
}
