//! The single-employee month listing.

use crate::error::QueryError;
use crate::model::{Sheet, MISSING};
use crate::report::DayCode;
use serde::Serialize;

/// One employee's recorded shifts, one entry per non-blank day column in
/// sheet order. Off words are not filtered here; only blank and missing
/// cells are omitted.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct NameReport {
    name: String,
    entries: Vec<DayCode>,
}

pub fn build(sheet: &Sheet, name: &str) -> Result<NameReport, QueryError> {
    let name = name.trim();
    let row = sheet
        .find_row(name)
        .ok_or_else(|| QueryError::NameNotFound(name.to_string()))?;

    let mut entries = Vec::new();
    for col in 1..sheet.columns().len() {
        let code = sheet.code(row, col);
        if code.is_empty() || code == MISSING {
            continue;
        }
        entries.push(DayCode::new(&sheet.columns()[col], code));
    }

    Ok(NameReport {
        name: name.to_string(),
        entries,
    })
}

impl NameReport {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[DayCode] {
        &self.entries
    }

    pub fn render(&self) -> String {
        let mut lines = vec![format!("[shifts for {}]", self.name), String::new()];
        lines.extend(self.entries.iter().map(DayCode::line));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::sample_sheet;

    #[test]
    fn test_unknown_name_fails() {
        let result = build(&sample_sheet(), "山田");
        assert_eq!(
            result.unwrap_err(),
            QueryError::NameNotFound("山田".to_string())
        );
    }

    #[test]
    fn test_name_input_is_trimmed() {
        assert!(build(&sample_sheet(), " 田中 ").is_ok());
    }

    #[test]
    fn test_blank_days_are_omitted_but_off_words_kept() {
        let report = build(&sample_sheet(), "田中").unwrap();
        // Day 4 is blank and omitted; the off-word days stay listed.
        assert_eq!(
            report.entries(),
            &[
                DayCode::new("1-day", "A"),
                DayCode::new("2-day", "休"),
                DayCode::new("3-day", "深あ"),
                DayCode::new("5-day", "B"),
            ]
        );
    }

    #[test]
    fn test_missing_cells_are_omitted() {
        let report = build(&sample_sheet(), "鈴木").unwrap();
        // Day 3 holds the literal missing token.
        assert!(!report.entries().iter().any(|e| e.label() == "3-day"));
    }

    #[test]
    fn test_render() {
        let report = build(&sample_sheet(), "田中").unwrap();
        let text = report.render();
        assert!(text.starts_with("[shifts for 田中]\n"));
        assert!(text.contains("1-day: A"));
        assert!(text.contains("2-day: 休"));
    }
}
