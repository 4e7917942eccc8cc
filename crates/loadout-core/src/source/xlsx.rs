use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx};
use indexmap::IndexMap;

use crate::error::ProfileError;
use crate::source::{Cell, Row, TableSource};

/// An xlsx workbook, read eagerly on open.
///
/// Every sheet is converted to rows up front so the file handle is released
/// before any section reader runs.
#[derive(Debug, Clone)]
pub struct XlsxSource {
    name: String,
    sheets: IndexMap<String, Vec<Row>>,
}

impl XlsxSource {
    pub fn open(path: &Path) -> Result<Self, ProfileError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes, path.display().to_string())
    }

    pub fn from_bytes(bytes: &[u8], name: impl Into<String>) -> Result<Self, ProfileError> {
        let cursor = Cursor::new(bytes);
        let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
            .map_err(|e| ProfileError::Workbook(format!("failed to open xlsx: {e}")))?;

        let mut sheets = IndexMap::new();
        for sheet_name in workbook.sheet_names() {
            let range = workbook
                .worksheet_range(&sheet_name)
                .map_err(|e| ProfileError::Workbook(format!("sheet '{sheet_name}': {e}")))?;
            sheets.insert(sheet_name, range_rows(&range));
        }

        Ok(XlsxSource {
            name: name.into(),
            sheets,
        })
    }
}

impl TableSource for XlsxSource {
    fn sheet(&self, name: &str) -> Result<Vec<Row>, ProfileError> {
        self.sheets
            .get(name)
            .cloned()
            .ok_or_else(|| ProfileError::MissingSection {
                sheet: name.to_string(),
            })
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

/// Expand a used range into rows anchored at A1.
fn range_rows(range: &Range<Data>) -> Vec<Row> {
    let Some((end_row, end_col)) = range.end() else {
        return Vec::new();
    };

    (0..=end_row)
        .map(|r| {
            (0..=end_col)
                .map(|c| range.get_value((r, c)).map(to_cell).unwrap_or(Cell::Empty))
                .collect()
        })
        .collect()
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        _ => Cell::Text(format!("{data}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_calamine_cells() {
        assert_eq!(to_cell(&Data::Int(3)), Cell::Number(3.0));
        assert_eq!(to_cell(&Data::Float(2.5)), Cell::Number(2.5));
        assert_eq!(to_cell(&Data::Bool(false)), Cell::Bool(false));
        assert_eq!(to_cell(&Data::Empty), Cell::Empty);
        assert_eq!(
            to_cell(&Data::String("Rifle".into())),
            Cell::Text("Rifle".into())
        );
    }

    #[test]
    fn rows_are_anchored_at_a1() {
        let mut range: Range<Data> = Range::new((1, 1), (2, 2));
        range.set_value((1, 1), Data::String("name".into()));
        range.set_value((2, 2), Data::Float(1.5));

        let rows = range_rows(&range);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec![Cell::Empty, Cell::Empty, Cell::Empty]);
        assert_eq!(rows[1][1], Cell::Text("name".into()));
        assert_eq!(rows[2][2], Cell::Number(1.5));
    }

    #[test]
    fn garbage_bytes_are_a_workbook_error() {
        let err = XlsxSource::from_bytes(b"not a zip", "junk").unwrap_err();
        assert!(matches!(err, ProfileError::Workbook(_)));
    }
}
