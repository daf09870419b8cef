//! Shared test utilities.
//!
//! This module is only compiled when running tests (`#[cfg(test)]`).

use crate::model::Sheet;
use crate::words::OffWords;
use crate::Session;

/// A small sheet exercising every classification path.
///
/// Day columns, per employee:
///
/// | row  | 1-day | 2-day | 3-day | 4-day | 5-day |
/// |------|-------|-------|-------|-------|-------|
/// | 田中 | A     | 休    | 深あ  |       | B     |
/// | 鈴木 | 夜わ  | B     | nan   | 年休  | 休み  |
/// | 佐藤 | ー    |       | C     | A     | 休    |
pub(crate) fn sample_sheet() -> Sheet {
    Sheet::new(
        vec!["氏名", "1日", "2日", "3日", "4日", "5日"],
        vec![
            vec!["田中", "A", "休", "深あ", "", "B"],
            vec!["鈴木", "夜わ", "B", "nan", "年休", "休み"],
            vec!["佐藤", "ー", "", "C", "A", "休"],
        ],
    )
    .unwrap()
}

/// A session with the sample sheet loaded and the default off words.
pub(crate) fn sample_session() -> Session {
    let mut session = Session::new(OffWords::default());
    session.replace_sheet(sample_sheet());
    session
}
