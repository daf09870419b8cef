//! The running session: at most one loaded sheet plus the current off-word
//! list. Queries go through here so that "no sheet loaded yet" is a typed,
//! testable failure rather than a crash.

use crate::error::QueryError;
use crate::model::Sheet;
use crate::report::{self, CompareReport, DayReport, NameReport, RangeReport};
use crate::words::OffWords;
use crate::{import, Result};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct Session {
    sheet: Option<Sheet>,
    words: OffWords,
}

impl Session {
    pub fn new(words: OffWords) -> Self {
        Self { sheet: None, words }
    }

    /// Load the sheet at `path`, replacing any previously loaded sheet
    /// wholesale. A failed load leaves the previous sheet in place.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let sheet = import::load_sheet(path)?;
        info!(
            "Loaded {} with {} employees and {} columns",
            path.display(),
            sheet.row_count(),
            sheet.columns().len()
        );
        self.sheet = Some(sheet);
        Ok(())
    }

    /// Replace the loaded sheet directly. Used by tests and by callers that
    /// build sheets from something other than a file.
    pub fn replace_sheet(&mut self, sheet: Sheet) {
        self.sheet = Some(sheet);
    }

    /// Replace the off-word list. Takes effect on the next query.
    pub fn set_words(&mut self, words: OffWords) {
        self.words = words;
    }

    pub fn words(&self) -> &OffWords {
        &self.words
    }

    fn sheet(&self) -> Result<&Sheet, QueryError> {
        self.sheet.as_ref().ok_or(QueryError::NoSheet)
    }

    pub fn day_report(&self, day: u32) -> Result<DayReport, QueryError> {
        report::day::build(self.sheet()?, day, &self.words)
    }

    pub fn name_report(&self, name: &str) -> Result<NameReport, QueryError> {
        report::name::build(self.sheet()?, name)
    }

    pub fn range_report(&self, start: u32, end: u32) -> Result<RangeReport, QueryError> {
        report::range::build(self.sheet()?, start, end)
    }

    pub fn compare_report(&self, first: &str, second: &str) -> Result<CompareReport, QueryError> {
        report::compare::build(self.sheet()?, first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::sample_sheet;

    #[test]
    fn test_queries_without_a_sheet_fail() {
        let session = Session::new(OffWords::default());
        assert_eq!(session.day_report(1).unwrap_err(), QueryError::NoSheet);
        assert_eq!(
            session.name_report("田中").unwrap_err(),
            QueryError::NoSheet
        );
        assert_eq!(
            session.range_report(1, 2).unwrap_err(),
            QueryError::NoSheet
        );
        assert_eq!(
            session.compare_report("田中", "鈴木").unwrap_err(),
            QueryError::NoSheet
        );
    }

    #[test]
    fn test_queries_after_replace_sheet() {
        let mut session = Session::new(OffWords::default());
        session.replace_sheet(sample_sheet());
        assert!(session.day_report(1).is_ok());
        assert!(session.name_report("田中").is_ok());
    }

    #[test]
    fn test_set_words_affects_next_query() {
        let mut session = Session::new(OffWords::default());
        session.replace_sheet(sample_sheet());

        // 深あ on day 3 is off with the default list.
        let before = session.day_report(3).unwrap();
        assert!(before.working().iter().all(|e| e.code() != "深あ"));

        session.set_words(OffWords::new(["休", "年休"]));
        let after = session.day_report(3).unwrap();
        assert!(after.working().iter().any(|e| e.code() == "深あ"));
    }

    #[test]
    fn test_failed_query_leaves_state_usable() {
        let mut session = Session::new(OffWords::default());
        session.replace_sheet(sample_sheet());
        assert!(session.day_report(15).is_err());
        assert!(session.day_report(1).is_ok());
    }
}
