//! Types that represent the in-memory attendance sheet.
mod sheet;

pub use sheet::{day_label, Sheet, MISSING};
