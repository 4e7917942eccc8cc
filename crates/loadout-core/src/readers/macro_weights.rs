use super::{data_rows, text_at, weight_at, ReadStats};
use crate::model::{MacroGroup, MacroWeights};
use crate::source::Row;

/// Read the MACRO sheet: `group | key | weight`.
pub fn read_macro(sheet: &str, rows: &[Row]) -> (MacroWeights, ReadStats) {
    let mut weights = MacroWeights::default();
    let mut stats = ReadStats::default();

    for (row_number, row) in data_rows(rows) {
        let (Some(group), Some(key)) = (text_at(row, 0), text_at(row, 1)) else {
            stats.skip(sheet, row_number, "missing group or key");
            continue;
        };
        let Some(group) = MacroGroup::from_key(&group) else {
            stats.skip(sheet, row_number, "unknown macro group");
            continue;
        };
        let Some(weight) = weight_at(row, 2) else {
            stats.skip(sheet, row_number, "weight is not a number");
            continue;
        };
        weights.insert(group, key, weight);
        stats.accept();
    }

    tracing::debug!(sheet, accepted = stats.accepted, skipped = stats.skipped, "read macro weights");
    (weights, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Cell;

    fn header() -> Row {
        vec!["group".into(), "key".into(), "weight".into()]
    }

    #[test]
    fn test_reads_weights_into_groups() {
        let rows = vec![
            header(),
            vec!["primarySubcategory".into(), "Shotgun".into(), Cell::from(0.9)],
            vec!["stratagemTop".into(), "Supply".into(), Cell::from(0.4)],
        ];
        let (weights, stats) = read_macro("MACRO", &rows);
        assert_eq!(weights.group(MacroGroup::PrimarySubcategory)["Shotgun"], 0.9);
        assert_eq!(weights.group(MacroGroup::StratagemTop)["Supply"], 0.4);
        assert_eq!(stats, ReadStats { accepted: 2, skipped: 0 });
    }

    #[test]
    fn test_unknown_group_dropped() {
        let rows = vec![
            header(),
            vec!["bogusGroup".into(), "Shotgun".into(), Cell::from(2.0)],
        ];
        let (weights, stats) = read_macro("MACRO", &rows);
        assert!(weights.iter().all(|(_, w)| w.is_empty()));
        assert_eq!(stats.skipped, 1);
    }

    #[test]
    fn test_missing_cells_skip_row() {
        let rows = vec![
            header(),
            vec![Cell::Empty, "Shotgun".into(), Cell::from(2.0)],
            vec!["supplySub".into(), "   ".into()],
            vec!["supplySub".into()],
        ];
        let (weights, stats) = read_macro("MACRO", &rows);
        assert!(weights.group(MacroGroup::SupplySub).is_empty());
        assert_eq!(stats, ReadStats { accepted: 0, skipped: 3 });
    }

    #[test]
    fn test_header_row_is_never_data() {
        let rows = vec![vec!["supplySub".into(), "Weapons".into(), Cell::from(5.0)]];
        let (weights, _) = read_macro("MACRO", &rows);
        assert!(weights.group(MacroGroup::SupplySub).is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let rows = vec![
            header(),
            vec!["defensiveSub".into(), "Mines".into(), Cell::from(0.8)],
            vec!["defensiveSub".into(), "Sentries".into()],
            vec!["defensiveSub".into(), "Mines".into(), Cell::from(0.2)],
        ];
        let (weights, _) = read_macro("MACRO", &rows);
        let group = weights.group(MacroGroup::DefensiveSub);
        assert_eq!(group.len(), 2);
        assert_eq!(group["Mines"], 0.2);
        assert_eq!(group["Sentries"], 1.0);
        assert_eq!(group.get_index(0).map(|(k, _)| k.as_str()), Some("Mines"));
    }

    #[test]
    fn test_keys_are_trimmed() {
        let rows = vec![
            header(),
            vec![" offensiveSub ".into(), " Orbitals ".into(), Cell::from(1.2)],
        ];
        let (weights, _) = read_macro("MACRO", &rows);
        assert_eq!(weights.group(MacroGroup::OffensiveSub)["Orbitals"], 1.2);
    }
}
