use indexmap::IndexMap;

use super::{data_rows, text_at, weight_at, ReadStats};
use crate::model::{Pool, ScopedCategories, WeightKind};
use crate::source::Row;

/// Read the SCOPED_EQUIP sheet: `pool | categoryKey | kind(tag|id) | key | weight`.
///
/// The result always holds the three equipment pools, in order. A category
/// is created the first time a row with an accepted pool and a usable weight
/// names it, before the kind is checked, so a row with an unknown kind still
/// registers its category.
pub fn read_scoped_equipment(sheet: &str, rows: &[Row]) -> (IndexMap<Pool, ScopedCategories>, ReadStats) {
    let mut pools: IndexMap<Pool, ScopedCategories> = Pool::EQUIPMENT
        .into_iter()
        .map(|p| (p, ScopedCategories::new()))
        .collect();
    let mut stats = ReadStats::default();

    for (row_number, row) in data_rows(rows) {
        let (Some(pool), Some(category), Some(kind), Some(key)) = (
            text_at(row, 0),
            text_at(row, 1),
            text_at(row, 2),
            text_at(row, 3),
        ) else {
            stats.skip(sheet, row_number, "missing pool, category, kind or key");
            continue;
        };
        let Some(pool) = Pool::equipment_from_str_loose(&pool) else {
            stats.skip(sheet, row_number, "unknown pool");
            continue;
        };
        let categories = pools.entry(pool).or_default();
        scope_row(categories, category, &kind, key, row, 4, sheet, row_number, &mut stats);
    }

    tracing::debug!(sheet, accepted = stats.accepted, skipped = stats.skipped, "read scoped equipment");
    (pools, stats)
}

/// Read the SCOPED_STRAT sheet: `categoryKey | kind(tag|id) | key | weight`.
pub fn read_scoped_stratagems(sheet: &str, rows: &[Row]) -> (ScopedCategories, ReadStats) {
    let mut categories = ScopedCategories::new();
    let mut stats = ReadStats::default();

    for (row_number, row) in data_rows(rows) {
        let (Some(category), Some(kind), Some(key)) =
            (text_at(row, 0), text_at(row, 1), text_at(row, 2))
        else {
            stats.skip(sheet, row_number, "missing category, kind or key");
            continue;
        };
        scope_row(&mut categories, category, &kind, key, row, 3, sheet, row_number, &mut stats);
    }

    tracing::debug!(sheet, accepted = stats.accepted, skipped = stats.skipped, "read scoped stratagems");
    (categories, stats)
}

#[allow(clippy::too_many_arguments)]
fn scope_row(
    categories: &mut ScopedCategories,
    category: String,
    kind: &str,
    key: String,
    row: &Row,
    weight_col: usize,
    sheet: &str,
    row_number: usize,
    stats: &mut ReadStats,
) {
    let Some(weight) = weight_at(row, weight_col) else {
        stats.skip(sheet, row_number, "weight is not a number");
        return;
    };
    let node = categories.entry(category).or_default();
    let Some(kind) = WeightKind::from_str_loose(kind) else {
        stats.skip(sheet, row_number, "unknown kind");
        return;
    };
    node.insert(kind, key, weight);
    stats.accept();
}
