use crate::commands::Out;
use crate::report::NameReport;
use crate::{Result, Session};

/// Run the single-employee month listing.
pub fn name(session: &Session, name: &str) -> Result<Out<NameReport>> {
    let report = session.name_report(name)?;
    Ok(Out::new(report.render(), report))
}
