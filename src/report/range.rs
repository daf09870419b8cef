//! The per-employee listing over an inclusive day range.

use crate::classify::PLAIN_OFF;
use crate::error::QueryError;
use crate::model::{day_label, Sheet, MISSING};
use crate::report::DayCode;
use serde::Serialize;

/// Every employee's shifts over `[start, end]`, one block per employee in
/// sheet order.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RangeReport {
    start: u32,
    end: u32,
    blocks: Vec<RangeBlock>,
}

/// One employee's block within a range report.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RangeBlock {
    name: String,
    entries: Vec<DayCode>,
}

/// Build the range listing. Days whose column is absent are skipped, as are
/// blank cells, missing cells, and cells equal to the bare plain-off token.
/// The plain-off exclusion deliberately does NOT consult the configured
/// off-word list; only the single bare token is filtered.
pub fn build(sheet: &Sheet, start: u32, end: u32) -> Result<RangeReport, QueryError> {
    if start > end {
        return Err(QueryError::InvalidRange { start, end });
    }

    let mut blocks = Vec::new();
    for row in 0..sheet.row_count() {
        let mut entries = Vec::new();
        for day in start..=end {
            let label = day_label(day);
            let Some(col) = sheet.column_index(&label) else {
                continue;
            };
            let code = sheet.code(row, col);
            if code.is_empty() || code == MISSING || code == PLAIN_OFF {
                continue;
            }
            entries.push(DayCode::new(label, code));
        }
        blocks.push(RangeBlock {
            name: sheet.cell(row, 0).to_string(),
            entries,
        });
    }

    Ok(RangeReport { start, end, blocks })
}

impl RangeReport {
    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn blocks(&self) -> &[RangeBlock] {
        &self.blocks
    }

    pub fn render(&self) -> String {
        let mut lines = vec![format!("[days {}-{}]", self.start, self.end), String::new()];
        for block in &self.blocks {
            lines.push(format!("<{}>", block.name));
            lines.extend(block.entries.iter().map(DayCode::line));
            lines.push(String::new());
        }
        lines.join("\n")
    }
}

impl RangeBlock {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[DayCode] {
        &self.entries
    }
}
