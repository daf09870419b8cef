use thiserror::Error;

pub type Error = anyhow::Error;
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by the query engine. All of these are user-facing and
/// recoverable: a failed query aborts only itself and leaves the loaded
/// sheet and the off-word list untouched.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum QueryError {
    #[error("no attendance sheet has been loaded, pass one with --sheet")]
    NoSheet,

    #[error("column '{0}' does not exist in the sheet")]
    ColumnNotFound(String),

    #[error("expected a day number, got '{0}'")]
    InvalidInput(String),

    #[error("the range starts on day {start} but ends on day {end}")]
    InvalidRange { start: u32, end: u32 },

    #[error("no employee named '{0}' exists in the sheet")]
    NameNotFound(String),
}
