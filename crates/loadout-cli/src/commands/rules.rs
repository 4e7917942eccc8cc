use loadout_core::rules::builtin;
use loadout_core::rules::RulesBlock;

pub fn list() -> Result<(), loadout_core::error::ProfileError> {
    println!("Available rules presets:\n");
    for name in builtin::PRESETS {
        let flags = builtin::load_preset(name)?;
        println!("  {:<8} {} flag(s)", name, flags.len());
        match RulesBlock::from_name(name) {
            Some(RulesBlock::Full) => {
                println!("           Used when META!B2 (UseRulesFromBase) is blank or 'true'.")
            }
            Some(RulesBlock::Minimal) => {
                println!("           Used when META!B2 holds any other text, e.g. 'false'.")
            }
            None => {}
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), loadout_core::error::ProfileError> {
    let flags = builtin::load_preset(preset)?;

    let width = flags.keys().map(|k| k.len()).max().unwrap_or(10);
    for (name, value) in &flags {
        println!("  {:<width$}  {}", name, value, width = width);
    }

    Ok(())
}
