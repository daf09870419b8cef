//! Loading an attendance sheet from a CSV file.

use crate::model::Sheet;
use crate::Result;
use anyhow::Context;
use std::path::Path;
use tracing::debug;

/// Read `path` as a CSV attendance sheet. The first record is the header
/// row; records may be ragged (short rows read as missing cells, long rows
/// are rejected by the sheet model).
pub fn load_sheet(path: &Path) -> Result<Sheet> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Unable to open sheet file {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("Unable to read the header row of {}", path.display()))?
        .iter()
        .map(String::from)
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("Malformed CSV record in {}", path.display()))?;
        rows.push(record.iter().map(String::from).collect());
    }
    debug!("Read {} data rows from {}", rows.len(), path.display());

    Sheet::new(headers, rows)
        .with_context(|| format!("The sheet at {} could not be interpreted", path.display()))
}
