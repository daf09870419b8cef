use crate::commands::Out;
use crate::report::{parse_day, DayReport};
use crate::{export, Result, Session};
use anyhow::Context;
use chrono::{Datelike, Local};
use std::path::Path;
use tracing::info;

/// Run the single-day roster query. With no day argument the current
/// day-of-month is used. When `export_path` is given, the working section
/// is additionally written out as a two-column CSV.
pub fn day(
    session: &Session,
    day: Option<&str>,
    export_path: Option<&Path>,
) -> Result<Out<DayReport>> {
    let day = match day {
        Some(input) => parse_day(input)?,
        None => Local::now().day(),
    };
    let report = session.day_report(day)?;

    if let Some(path) = export_path {
        let lines = report.working_lines();
        let rows = export::parse_lines(lines.iter().map(String::as_str));
        export::write_csv(path, &rows)
            .with_context(|| format!("Failed to export the day report to {}", path.display()))?;
        info!("Exported {} working rows to {}", rows.len(), path.display());
    }

    Ok(Out::new(report.render(), report))
}
