use indexmap::IndexMap;

use crate::model::{MacroWeights, MicroWeights, PoolNode, Profile, TagIdWeights, WeightMap};
use crate::rules::{RuleFlags, RuleValue};

/// The closed set of values the profile literal can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Map(IndexMap<String, Value>),
    Str(String),
    Bool(bool),
    Number(f64),
    Null,
}

impl Value {
    pub fn map<K, I>(entries: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<&WeightMap> for Value {
    fn from(weights: &WeightMap) -> Self {
        Value::map(weights.iter().map(|(k, w)| (k.as_str(), Value::Number(*w))))
    }
}

impl From<&TagIdWeights> for Value {
    fn from(node: &TagIdWeights) -> Self {
        Value::map([("tag", Value::from(&node.tag)), ("id", Value::from(&node.id))])
    }
}

impl From<&RuleValue> for Value {
    fn from(value: &RuleValue) -> Self {
        match value {
            RuleValue::Flag(b) => Value::Bool(*b),
            RuleValue::Number(n) => Value::Number(*n),
        }
    }
}

impl From<&RuleFlags> for Value {
    fn from(flags: &RuleFlags) -> Self {
        Value::map(flags.iter().map(|(k, v)| (k.as_str(), Value::from(v))))
    }
}

impl From<&MacroWeights> for Value {
    fn from(macros: &MacroWeights) -> Self {
        Value::map(macros.iter().map(|(g, w)| (g.key(), Value::from(w))))
    }
}

impl From<&PoolNode> for Value {
    fn from(pool: &PoolNode) -> Self {
        Value::map([
            ("tag", Value::from(&pool.tag)),
            ("id", Value::from(&pool.id)),
            (
                "categories",
                Value::map(pool.categories.iter().map(|(k, n)| (k.as_str(), Value::from(n)))),
            ),
        ])
    }
}

impl From<&MicroWeights> for Value {
    fn from(micro: &MicroWeights) -> Self {
        Value::map([
            ("tag", Value::from(&micro.tag)),
            ("id", Value::from(&micro.id)),
            (
                "pools",
                Value::map(micro.pools.iter().map(|(p, n)| (p.key(), Value::from(n)))),
            ),
        ])
    }
}

impl From<&Profile> for Value {
    fn from(profile: &Profile) -> Self {
        Value::map([
            ("name", Value::Str(profile.name.clone())),
            ("rules", Value::from(&profile.rules)),
            ("macro", Value::from(&profile.macro_weights)),
            ("micro", Value::from(&profile.micro)),
        ])
    }
}
