//! The single-day roster report: who is working, who is off.

use crate::classify::{classify, display_code, Shift, BUCKET_MARKERS};
use crate::error::QueryError;
use crate::model::{day_label, Sheet};
use crate::report::Entry;
use crate::words::OffWords;
use serde::Serialize;

/// A single day's roster, split into a working section and an off/special
/// section. The off/special section is grouped by bucket in marker priority
/// order; rows keep their original sheet order within each group.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DayReport {
    label: String,
    working: Vec<Entry>,
    off: Vec<Entry>,
}

/// Build the roster for `day`. Every row lands in exactly one of the two
/// sections; blank and missing cells are never dropped, they appear in the
/// off/special section rendered as the missing token.
pub fn build(sheet: &Sheet, day: u32, words: &OffWords) -> Result<DayReport, QueryError> {
    let label = day_label(day);
    let col = sheet
        .column_index(&label)
        .ok_or_else(|| QueryError::ColumnNotFound(label.clone()))?;

    let mut working = Vec::new();
    // One list per bucket marker plus the catch-all at the end, filled in a
    // single pass so sheet order is preserved within each bucket.
    let mut buckets: Vec<Vec<Entry>> = vec![Vec::new(); BUCKET_MARKERS.len() + 1];

    for row in 0..sheet.row_count() {
        let name = sheet.cell(row, 0);
        match classify(sheet.cell(row, col), words) {
            Shift::Work(code) => working.push(Entry::new(code, name)),
            Shift::Off { bucket, code } => {
                buckets[bucket].push(Entry::new(display_code(&code), name))
            }
            Shift::Other(code) => {
                let last = buckets.len() - 1;
                buckets[last].push(Entry::new(display_code(&code), name));
            }
        }
    }

    Ok(DayReport {
        label,
        working,
        off: buckets.into_iter().flatten().collect(),
    })
}

impl DayReport {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn working(&self) -> &[Entry] {
        &self.working
    }

    pub fn off(&self) -> &[Entry] {
        &self.off
    }

    /// The rendered working-section entry lines, in sheet order. This is
    /// what the export command serializes.
    pub fn working_lines(&self) -> Vec<String> {
        self.working.iter().map(Entry::line).collect()
    }

    pub fn render(&self) -> String {
        let mut lines = vec![format!("[{}: working]", self.label), String::new()];
        lines.extend(self.working.iter().map(Entry::line));
        lines.push(String::new());
        lines.push(format!("[{}: off / special]", self.label));
        lines.push(String::new());
        lines.extend(self.off.iter().map(Entry::line));
        lines.join("\n")
    }
}
