use crate::rules::RulesBlock;
use crate::source::Row;

/// Profile name used when META!B1 is blank.
pub const DEFAULT_PROFILE_NAME: &str = "Custom";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meta {
    pub name: String,
    pub rules_block: RulesBlock,
}

/// Read the META sheet: profile name in B1, rules selector in B2.
///
/// META has no header row; the cells are addressed directly.
pub fn read_meta(rows: &[Row]) -> Meta {
    let cell_b = |row: usize| rows.get(row).and_then(|r| super::text_at(r, 1));

    let name = cell_b(0).unwrap_or_else(|| DEFAULT_PROFILE_NAME.to_string());
    let selector = cell_b(1);
    let rules_block = RulesBlock::from_selector(selector.as_deref());

    tracing::debug!(name = %name, selector = ?selector, rules = %rules_block, "read META");

    Meta { name, rules_block }
}
