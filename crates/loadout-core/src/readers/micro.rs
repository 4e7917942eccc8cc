use super::{data_rows, text_at, weight_at, ReadStats};
use crate::model::{TagIdWeights, WeightKind};
use crate::source::Row;

/// Read the MICRO sheet: `kind(tag|id) | key | weight`.
pub fn read_micro(sheet: &str, rows: &[Row]) -> (TagIdWeights, ReadStats) {
    let mut weights = TagIdWeights::default();
    let mut stats = ReadStats::default();

    for (row_number, row) in data_rows(rows) {
        let (Some(kind), Some(key)) = (text_at(row, 0), text_at(row, 1)) else {
            stats.skip(sheet, row_number, "missing kind or key");
            continue;
        };
        let Some(kind) = WeightKind::from_str_loose(&kind) else {
            stats.skip(sheet, row_number, "unknown kind");
            continue;
        };
        let Some(weight) = weight_at(row, 2) else {
            stats.skip(sheet, row_number, "weight is not a number");
            continue;
        };
        weights.insert(kind, key, weight);
        stats.accept();
    }

    tracing::debug!(sheet, accepted = stats.accepted, skipped = stats.skipped, "read micro weights");
    (weights, stats)
}
