use crate::error::ProfileError;
use crate::rules::{RuleFlags, RulesBlock};

const FULL_RULES_JSON: &str = include_str!("../../../../rules/full.json");
const MINIMAL_RULES_JSON: &str = include_str!("../../../../rules/minimal.json");

/// Available rules presets.
pub const PRESETS: &[&str] = &["full", "minimal"];

/// Load the flags for a rules block.
pub fn load_block(block: RulesBlock) -> Result<RuleFlags, ProfileError> {
    let json = match block {
        RulesBlock::Full => FULL_RULES_JSON,
        RulesBlock::Minimal => MINIMAL_RULES_JSON,
    };
    let flags: RuleFlags = serde_json::from_str(json)?;
    Ok(flags)
}

/// Load a rules preset by name.
pub fn load_preset(name: &str) -> Result<RuleFlags, ProfileError> {
    match RulesBlock::from_name(name) {
        Some(block) => load_block(block),
        None => Err(ProfileError::Preset(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
