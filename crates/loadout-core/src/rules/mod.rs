pub mod builtin;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single rules flag as the randomizer reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Flag(bool),
    Number(f64),
}

impl fmt::Display for RuleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleValue::Flag(b) => write!(f, "{b}"),
            RuleValue::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Flag name -> value, in preset order.
pub type RuleFlags = IndexMap<String, RuleValue>;

/// Which fixed rules block a profile carries. The two are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesBlock {
    /// The base rule set, used unless the workbook opts out.
    Full,
    /// Only `useEvenStratagemTop`.
    Minimal,
}

impl RulesBlock {
    /// Pick the block from the META rules selector cell text.
    ///
    /// Blank selects the full block. Otherwise only the text `true`
    /// (any case) does; `1`, `yes` and the like select the minimal block.
    pub fn from_selector(selector: Option<&str>) -> RulesBlock {
        match selector {
            None => RulesBlock::Full,
            Some(text) if text.trim().to_lowercase() == "true" => RulesBlock::Full,
            Some(_) => RulesBlock::Minimal,
        }
    }

    pub fn from_name(name: &str) -> Option<RulesBlock> {
        match name.trim().to_lowercase().as_str() {
            "full" => Some(RulesBlock::Full),
            "minimal" => Some(RulesBlock::Minimal),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RulesBlock::Full => "full",
            RulesBlock::Minimal => "minimal",
        }
    }
}

impl fmt::Display for RulesBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_true_any_case() {
        assert_eq!(RulesBlock::from_selector(Some("true")), RulesBlock::Full);
        assert_eq!(RulesBlock::from_selector(Some("True")), RulesBlock::Full);
        assert_eq!(RulesBlock::from_selector(Some(" TRUE ")), RulesBlock::Full);
    }

    #[test]
    fn test_selector_blank_is_full() {
        assert_eq!(RulesBlock::from_selector(None), RulesBlock::Full);
    }

    #[test]
    fn test_selector_other_text_is_minimal() {
        for text in ["false", "FALSE", "1", "0", "yes"] {
            assert_eq!(
                RulesBlock::from_selector(Some(text)),
                RulesBlock::Minimal,
                "selector {text:?}"
            );
        }
    }

    #[test]
    fn test_rule_value_deserializes_untagged() {
        let flags: RuleFlags =
            serde_json::from_str(r#"{"a": true, "b": 3}"#).unwrap();
        assert_eq!(flags["a"], RuleValue::Flag(true));
        assert_eq!(flags["b"], RuleValue::Number(3.0));
    }
}
