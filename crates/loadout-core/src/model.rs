use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::rules::{RuleFlags, RulesBlock};

/// Weight applied when a row leaves its weight cell blank.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Key -> weight, in the order the keys first appeared in the workbook.
pub type WeightMap = IndexMap<String, f64>;

/// Category key -> scoped tag/id overrides.
pub type ScopedCategories = IndexMap<String, TagIdWeights>;

/// The fixed macro weight groups, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MacroGroup {
    PrimarySubcategory,
    SecondarySubcategory,
    ThrowableSubcategory,
    StratagemTop,
    OffensiveSub,
    DefensiveSub,
    SupplySub,
}

impl MacroGroup {
    pub const ALL: [MacroGroup; 7] = [
        MacroGroup::PrimarySubcategory,
        MacroGroup::SecondarySubcategory,
        MacroGroup::ThrowableSubcategory,
        MacroGroup::StratagemTop,
        MacroGroup::OffensiveSub,
        MacroGroup::DefensiveSub,
        MacroGroup::SupplySub,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MacroGroup::PrimarySubcategory => "primarySubcategory",
            MacroGroup::SecondarySubcategory => "secondarySubcategory",
            MacroGroup::ThrowableSubcategory => "throwableSubcategory",
            MacroGroup::StratagemTop => "stratagemTop",
            MacroGroup::OffensiveSub => "offensiveSub",
            MacroGroup::DefensiveSub => "defensiveSub",
            MacroGroup::SupplySub => "supplySub",
        }
    }

    /// Exact (case-sensitive) match against the group keys. Anything else is rejected.
    pub fn from_key(s: &str) -> Option<MacroGroup> {
        MacroGroup::ALL.into_iter().find(|g| g.key() == s)
    }
}

impl fmt::Display for MacroGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Discriminator for micro and scoped weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightKind {
    Tag,
    Id,
}

impl WeightKind {
    pub fn from_str_loose(s: &str) -> Option<WeightKind> {
        match s.trim().to_lowercase().as_str() {
            "tag" => Some(WeightKind::Tag),
            "id" => Some(WeightKind::Id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pool {
    Primaries,
    Secondaries,
    Throwables,
    Stratagems,
}

impl Pool {
    pub const ALL: [Pool; 4] = [
        Pool::Primaries,
        Pool::Secondaries,
        Pool::Throwables,
        Pool::Stratagems,
    ];

    /// Pools addressed by the scoped-equipment sheet.
    pub const EQUIPMENT: [Pool; 3] = [Pool::Primaries, Pool::Secondaries, Pool::Throwables];

    pub fn key(self) -> &'static str {
        match self {
            Pool::Primaries => "primaries",
            Pool::Secondaries => "secondaries",
            Pool::Throwables => "throwables",
            Pool::Stratagems => "stratagems",
        }
    }

    /// Case-insensitive match restricted to the equipment pools.
    pub fn equipment_from_str_loose(s: &str) -> Option<Pool> {
        let lower = s.trim().to_lowercase();
        Pool::EQUIPMENT.into_iter().find(|p| p.key() == lower)
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TagIdWeights {
    pub tag: WeightMap,
    pub id: WeightMap,
}

impl TagIdWeights {
    /// Set a weight; a repeated key keeps its position and takes the new value.
    pub fn insert(&mut self, kind: WeightKind, key: String, weight: f64) {
        match kind {
            WeightKind::Tag => self.tag.insert(key, weight),
            WeightKind::Id => self.id.insert(key, weight),
        };
    }

    pub fn get(&self, kind: WeightKind) -> &WeightMap {
        match kind {
            WeightKind::Tag => &self.tag,
            WeightKind::Id => &self.id,
        }
    }

    pub fn len(&self) -> usize {
        self.tag.len() + self.id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tag.is_empty() && self.id.is_empty()
    }
}

/// Macro weights. All seven groups are always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MacroWeights {
    groups: IndexMap<MacroGroup, WeightMap>,
}

impl Default for MacroWeights {
    fn default() -> Self {
        MacroWeights {
            groups: MacroGroup::ALL
                .into_iter()
                .map(|g| (g, WeightMap::new()))
                .collect(),
        }
    }
}

impl MacroWeights {
    pub fn insert(&mut self, group: MacroGroup, key: String, weight: f64) {
        self.groups.entry(group).or_default().insert(key, weight);
    }

    pub fn group(&self, group: MacroGroup) -> &WeightMap {
        // Every group is seeded in `default`, so the index cannot miss.
        &self.groups[&group]
    }

    pub fn iter(&self) -> impl Iterator<Item = (MacroGroup, &WeightMap)> {
        self.groups.iter().map(|(g, w)| (*g, w))
    }
}

/// One randomizer pool: reserved pool-wide overrides plus per-category overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PoolNode {
    pub tag: WeightMap,
    pub id: WeightMap,
    pub categories: ScopedCategories,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MicroWeights {
    pub tag: WeightMap,
    pub id: WeightMap,
    pub pools: IndexMap<Pool, PoolNode>,
}

impl MicroWeights {
    pub fn pool(&self, pool: Pool) -> &PoolNode {
        // Built from Pool::ALL by the assembler.
        &self.pools[&pool]
    }
}

/// The compiled profile handed to the randomizer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub name: String,
    #[serde(skip)]
    pub rules_block: RulesBlock,
    pub rules: RuleFlags,
    #[serde(rename = "macro")]
    pub macro_weights: MacroWeights,
    pub micro: MicroWeights,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macro_group_lookup_is_exact() {
        assert_eq!(
            MacroGroup::from_key("primarySubcategory"),
            Some(MacroGroup::PrimarySubcategory)
        );
        assert_eq!(MacroGroup::from_key("PrimarySubcategory"), None);
        assert_eq!(MacroGroup::from_key("bogusGroup"), None);
    }

    #[test]
    fn weight_kind_is_case_insensitive() {
        assert_eq!(WeightKind::from_str_loose(" TAG "), Some(WeightKind::Tag));
        assert_eq!(WeightKind::from_str_loose("Id"), Some(WeightKind::Id));
        assert_eq!(WeightKind::from_str_loose("slot"), None);
    }

    #[test]
    fn stratagems_are_not_an_equipment_pool() {
        assert_eq!(
            Pool::equipment_from_str_loose("Primaries"),
            Some(Pool::Primaries)
        );
        assert_eq!(Pool::equipment_from_str_loose("stratagems"), None);
    }

    #[test]
    fn default_macro_weights_have_every_group_in_order() {
        let macros = MacroWeights::default();
        let groups: Vec<_> = macros.iter().map(|(g, _)| g).collect();
        assert_eq!(groups, MacroGroup::ALL.to_vec());
        assert!(macros.iter().all(|(_, w)| w.is_empty()));
    }

    #[test]
    fn repeated_key_keeps_position_with_new_weight() {
        let mut node = TagIdWeights::default();
        node.insert(WeightKind::Tag, "stun".into(), 1.0);
        node.insert(WeightKind::Tag, "gas".into(), 1.0);
        node.insert(WeightKind::Tag, "stun".into(), 0.25);
        let keys: Vec<_> = node.tag.keys().cloned().collect();
        assert_eq!(keys, vec!["stun", "gas"]);
        assert_eq!(node.get(WeightKind::Tag)["stun"], 0.25);
        assert_eq!(node.len(), 2);
    }
}
