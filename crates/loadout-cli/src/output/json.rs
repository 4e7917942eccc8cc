use loadout_core::error::ProfileError;
use loadout_core::model::Profile;

pub fn print(profile: &Profile) -> Result<(), ProfileError> {
    let json = serde_json::to_string_pretty(profile)?;
    println!("{json}");
    Ok(())
}
