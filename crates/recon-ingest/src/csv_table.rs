use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use recon_model::RowSet;

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a sales CSV into a [`RowSet`]: first row is the header, fully blank
/// rows are dropped, ragged rows are padded or truncated to the header width.
pub fn read_csv_table(path: &Path) -> Result<RowSet> {
    let raw_rows = read_raw_grid(path)?;
    let Some((header, data)) = raw_rows.split_first() else {
        return Ok(RowSet::default());
    };
    let mut table = RowSet::new(header.iter().map(|value| normalize_header(value)).collect());
    for row in data {
        table.push_row(row.clone());
    }
    Ok(table)
}

/// Reads a CSV as a raw grid with no header interpretation.
///
/// The chronology reference sheet buries its real header under boilerplate
/// rows, so the catalog locates it by anchor instead of trusting row zero.
pub fn read_raw_grid(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}
