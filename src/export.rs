//! Serializing a day report's working section back out as a CSV file.

use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One exported row: the work code and the employee name.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ExportRow {
    work: String,
    name: String,
}

impl ExportRow {
    pub fn new(work: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            work: work.into(),
            name: name.into(),
        }
    }

    pub fn work(&self) -> &str {
        &self.work
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Parse rendered working-section lines back into rows, in line order.
/// Blank lines are skipped. A line is split on whitespace: the first token
/// is the work code and the last token is the name. A single-token line
/// keeps the token as the work code and leaves the name empty (lossy).
pub fn parse_lines<'a, I>(lines: I) -> Vec<ExportRow>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut rows = Vec::new();
    for line in lines {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [work] => rows.push(ExportRow::new(*work, "")),
            [work, .., name] => rows.push(ExportRow::new(*work, *name)),
        }
    }
    rows
}

/// Write rows to `path` as a two-column CSV with a `work,name` header.
pub fn write_csv(path: &Path, rows: &[ExportRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Unable to create export file {}", path.display()))?;
    writer
        .write_record(["work", "name"])
        .context("Unable to write the export header")?;
    for row in rows {
        writer
            .write_record([row.work(), row.name()])
            .context("Unable to write an export record")?;
    }
    writer
        .flush()
        .with_context(|| format!("Unable to finish writing {}", path.display()))?;
    debug!("Exported {} rows to {}", rows.len(), path.display());
    Ok(())
}
