pub mod memory;
pub mod xlsx;

use crate::error::ProfileError;

pub use memory::MemorySource;
pub use xlsx::XlsxSource;

/// A single spreadsheet cell, reduced to the types the readers care about.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// Trimmed text form of the cell, or `None` when it is blank.
    ///
    /// Integral numbers print without a fractional part, so a key typed as
    /// `5` in the workbook reads back as `"5"` rather than `"5.0"`.
    pub fn text(&self) -> Option<String> {
        let text = match self {
            Cell::Empty => return None,
            Cell::Text(s) => s.trim().to_string(),
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => b.to_string(),
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Number(n as f64)
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::Bool(b)
    }
}

/// One sheet row. Column 0 is spreadsheet column A.
pub type Row = Vec<Cell>;

/// Trait for workbook backends.
///
/// Rows are position-addressed from the top-left corner of the sheet: row 0
/// is spreadsheet row 1 even when the sheet's used range starts further down.
pub trait TableSource {
    /// All rows of the named sheet, or `MissingSection` if there is no such sheet.
    fn sheet(&self, name: &str) -> Result<Vec<Row>, ProfileError>;

    /// Name of the source (for diagnostics).
    fn source_name(&self) -> &str;
}
