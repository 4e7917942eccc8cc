//! Section readers: one per workbook sheet.
//!
//! Every data sheet has a header row followed by positional columns. A row
//! missing a required cell, or naming a group/kind/pool outside the fixed
//! sets, is dropped without error. The only failure a reader's caller can
//! see is a missing sheet, raised by the table source.

pub mod macro_weights;
pub mod meta;
pub mod micro;
pub mod scoped;

use crate::model::DEFAULT_WEIGHT;
use crate::source::{Cell, Row};

pub use macro_weights::read_macro;
pub use meta::{read_meta, Meta};
pub use micro::read_micro;
pub use scoped::{read_scoped_equipment, read_scoped_stratagems};

/// Row counts for one section, for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadStats {
    pub accepted: usize,
    pub skipped: usize,
}

impl ReadStats {
    fn accept(&mut self) {
        self.accepted += 1;
    }

    fn skip(&mut self, sheet: &str, row_number: usize, reason: &str) {
        self.skipped += 1;
        tracing::trace!(sheet, row = row_number, reason, "row dropped");
    }
}

/// Data rows with their 1-based spreadsheet row numbers, header excluded.
fn data_rows(rows: &[Row]) -> impl Iterator<Item = (usize, &Row)> {
    rows.iter().enumerate().skip(1).map(|(i, row)| (i + 1, row))
}

/// Trimmed, non-empty text of a column.
fn text_at(row: &Row, col: usize) -> Option<String> {
    row.get(col).and_then(Cell::text)
}

/// Weight of a column. Blank means the default weight; anything that is
/// not a finite, non-negative number yields `None` and the row should be dropped.
fn weight_at(row: &Row, col: usize) -> Option<f64> {
    let weight = match row.get(col) {
        None | Some(Cell::Empty) => return Some(DEFAULT_WEIGHT),
        Some(Cell::Number(n)) => *n,
        Some(Cell::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Some(DEFAULT_WEIGHT);
            }
            s.parse::<f64>().ok()?
        }
        Some(Cell::Bool(_)) => return None,
    };
    Some(weight).filter(|w| w.is_finite() && *w >= 0.0)
}
