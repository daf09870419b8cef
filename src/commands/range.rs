use crate::commands::Out;
use crate::report::{parse_day, RangeReport};
use crate::{Result, Session};

/// Run the day-range listing.
pub fn range(session: &Session, start: &str, end: &str) -> Result<Out<RangeReport>> {
    let start = parse_day(start)?;
    let end = parse_day(end)?;
    let report = session.range_report(start, end)?;
    Ok(Out::new(report.render(), report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::sample_session;

    #[test]
    fn test_range_command_renders_report() {
        let session = sample_session();
        let out = range(&session, "1", "3").unwrap();
        assert!(out.message().starts_with("[days 1-3]"));
        assert_eq!(out.structure().unwrap().blocks().len(), 3);
    }

    #[test]
    fn test_range_command_rejects_non_numeric_bounds() {
        let session = sample_session();
        assert!(range(&session, "a", "3").is_err());
        assert!(range(&session, "1", "").is_err());
    }

    #[test]
    fn test_range_command_rejects_backwards_range() {
        let session = sample_session();
        assert!(range(&session, "5", "3").is_err());
    }
}
