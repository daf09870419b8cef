use crate::Result;
use anyhow::bail;
use regex::Regex;

/// What a cell reads as when the row is too short to contain it. Mirrors
/// how the sheet appears to the rest of the engine: a missing cell and a
/// cell containing this literal token are indistinguishable.
pub const MISSING: &str = "nan";

/// The canonical column label for a day of the month.
pub fn day_label(day: u32) -> String {
    format!("{day}-day")
}

/// An in-memory attendance sheet.
///
/// The first column is the identity column and holds employee names. Every
/// header containing an integer in 1..=31 is rewritten to the canonical
/// day label at construction time; other headers pass through unchanged.
/// Rows keep the order they had in the file, and the whole structure is
/// read-only once built: a new load replaces the sheet wholesale.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Sheet {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new<S, R, I1, I2>(headers: I1, rows: I2) -> Result<Self>
    where
        S: Into<String>,
        R: IntoIterator<Item = S>,
        I1: IntoIterator<Item = S>,
        I2: IntoIterator<Item = R>,
    {
        let headers: Vec<String> = headers.into_iter().map(|h| h.into()).collect();
        if headers.is_empty() {
            bail!("An attendance sheet needs at least an identity column");
        }
        let columns = normalize_headers(headers)?;

        let mut parsed = Vec::new();
        for (row_ix, row) in rows.into_iter().enumerate() {
            let values: Vec<String> = row.into_iter().map(|v| v.into()).collect();
            if values.len() > columns.len() {
                bail!(
                    "A row longer than the headers list was encountered at row {}",
                    row_ix + 2
                );
            }
            parsed.push(values);
        }

        Ok(Self {
            columns,
            rows: parsed,
        })
    }

    /// The normalized column headers. The first one is the identity column.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn identity_column(&self) -> &str {
        &self.columns[0]
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == label)
    }

    /// The raw text of a cell; a cell the row does not reach reads as
    /// [`MISSING`].
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows[row]
            .get(col)
            .map(String::as_str)
            .unwrap_or(MISSING)
    }

    /// The trimmed text of a cell.
    pub fn code(&self, row: usize, col: usize) -> &str {
        self.cell(row, col).trim()
    }

    /// Find the first row whose identity cell equals `name` exactly.
    /// Duplicate names resolve to the first match.
    pub fn find_row(&self, name: &str) -> Option<usize> {
        (0..self.rows.len()).find(|&row| self.cell(row, 0) == name)
    }
}

/// Rewrite any header containing an integer in 1..=31 to the canonical day
/// label. The first integer in the header decides; headers without one, or
/// with an out-of-range one, pass through unchanged.
fn normalize_headers(headers: Vec<String>) -> Result<Vec<String>> {
    let digits = Regex::new("[0-9]+")?;
    Ok(headers
        .into_iter()
        .map(|header| {
            if let Some(m) = digits.find(&header) {
                if let Ok(day) = m.as_str().parse::<u32>() {
                    if (1..=31).contains(&day) {
                        return day_label(day);
                    }
                }
            }
            header
        })
        .collect())
}
