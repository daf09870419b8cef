//! The two-employee side-by-side comparison.

use crate::classify::PLAIN_OFF;
use crate::error::QueryError;
use crate::model::{Sheet, MISSING};
use serde::Serialize;

/// Field width of the day-label column.
const LABEL_WIDTH: usize = 8;
/// Field width of each employee column.
const CODE_WIDTH: usize = 15;

/// Two employees' shifts for every day column. The rendered form is a
/// fixed-width table: 8-character label field, 15-character code fields,
/// left-justified and space-padded. The widths are a contract; downstream
/// consumers parse the output.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CompareReport {
    first: String,
    second: String,
    rows: Vec<CompareRow>,
}

/// One day of the comparison.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CompareRow {
    label: String,
    first: String,
    second: String,
}

/// Build the comparison. Blank and missing cells render as the plain off
/// token; this substitution is display-only and never feeds back into
/// classification.
pub fn build(sheet: &Sheet, first: &str, second: &str) -> Result<CompareReport, QueryError> {
    let first = first.trim();
    let second = second.trim();
    let row_a = sheet
        .find_row(first)
        .ok_or_else(|| QueryError::NameNotFound(first.to_string()))?;
    let row_b = sheet
        .find_row(second)
        .ok_or_else(|| QueryError::NameNotFound(second.to_string()))?;

    let mut rows = Vec::new();
    for col in 1..sheet.columns().len() {
        rows.push(CompareRow {
            label: sheet.columns()[col].clone(),
            first: shown(sheet.code(row_a, col)),
            second: shown(sheet.code(row_b, col)),
        });
    }

    Ok(CompareReport {
        first: first.to_string(),
        second: second.to_string(),
        rows,
    })
}

fn shown(code: &str) -> String {
    if code.is_empty() || code == MISSING {
        PLAIN_OFF.to_string()
    } else {
        code.to_string()
    }
}

impl CompareReport {
    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn rows(&self) -> &[CompareRow] {
        &self.rows
    }

    pub fn render(&self) -> String {
        let header = format!(
            "{:<LABEL_WIDTH$}{:<CODE_WIDTH$}{:<CODE_WIDTH$}",
            "day", self.first, self.second
        );
        let underline = "-".repeat(header.chars().count());
        let mut lines = vec![
            format!("[{} vs {}]", self.first, self.second),
            String::new(),
            header,
            underline,
        ];
        for row in &self.rows {
            lines.push(format!(
                "{:<LABEL_WIDTH$}{:<CODE_WIDTH$}{:<CODE_WIDTH$}",
                row.label, row.first, row.second
            ));
        }
        lines.join("\n")
    }
}

impl CompareRow {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }
}
