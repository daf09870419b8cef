//! Report builders for the four query kinds.
//!
//! Each builder is a pure function over a sheet snapshot plus the current
//! off-word list; running one twice with the same inputs yields identical
//! output. The surrounding shell is responsible for obtaining the sheet and
//! for displaying or exporting the result.

pub mod compare;
pub mod day;
pub mod name;
pub mod range;

pub use compare::CompareReport;
pub use day::DayReport;
pub use name::NameReport;
pub use range::RangeReport;

use crate::error::QueryError;
use serde::Serialize;

/// Parse a user-entered day number. Non-numeric input is a typed engine
/// error so callers can surface it like any other query failure.
pub fn parse_day(input: &str) -> Result<u32, QueryError> {
    let input = input.trim();
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(QueryError::InvalidInput(input.to_string()));
    }
    input
        .parse()
        .map_err(|_| QueryError::InvalidInput(input.to_string()))
}

/// One work-code/employee pair from a day report.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Entry {
    code: String,
    name: String,
}

impl Entry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rendered line form: code, four spaces, name.
    pub fn line(&self) -> String {
        format!("{}    {}", self.code, self.name)
    }
}

/// One day-label/work-code pair from a name or range report.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DayCode {
    label: String,
    code: String,
}

impl DayCode {
    pub fn new(label: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            code: code.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn line(&self) -> String {
        format!("{}: {}", self.label, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day() {
        assert_eq!(parse_day("15").unwrap(), 15);
        assert_eq!(parse_day(" 3 ").unwrap(), 3);
    }

    #[test]
    fn test_parse_day_rejects_non_numeric() {
        for bad in ["", "  ", "abc", "1a", "-1", "1.5", "五"] {
            assert!(
                matches!(parse_day(bad), Err(QueryError::InvalidInput(_))),
                "'{bad}' should not parse"
            );
        }
    }

    #[test]
    fn test_entry_line() {
        assert_eq!(Entry::new("A", "田中").line(), "A    田中");
    }

    #[test]
    fn test_day_code_line() {
        assert_eq!(DayCode::new("5-day", "A").line(), "5-day: A");
    }
}
