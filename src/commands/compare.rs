use crate::commands::Out;
use crate::report::CompareReport;
use crate::{Result, Session};

/// Run the two-employee comparison.
pub fn compare(session: &Session, first: &str, second: &str) -> Result<Out<CompareReport>> {
    let report = session.compare_report(first, second)?;
    Ok(Out::new(report.render(), report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::sample_session;

    #[test]
    fn test_compare_command_renders_report() {
        let session = sample_session();
        let out = compare(&session, "田中", "鈴木").unwrap();
        assert!(out.message().starts_with("[田中 vs 鈴木]"));
    }

    #[test]
    fn test_compare_command_unknown_name_fails() {
        let session = sample_session();
        assert!(compare(&session, "田中", "山田").is_err());
    }
}
