use serde::Deserialize;
use std::path::Path;

use crate::error::ProfileError;
use crate::render::DEFAULT_INDENT;

/// Workbook sheet names for each section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetNames {
    pub meta: String,
    #[serde(rename = "macro")]
    pub macro_weights: String,
    pub micro: String,
    pub scoped_equip: String,
    pub scoped_strat: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        SheetNames {
            meta: "META".into(),
            macro_weights: "MACRO".into(),
            micro: "MICRO".into(),
            scoped_equip: "SCOPED_EQUIP".into(),
            scoped_strat: "SCOPED_STRAT".into(),
        }
    }
}

impl SheetNames {
    /// All five names, in read order.
    pub fn all(&self) -> [&str; 5] {
        [
            self.meta.as_str(),
            self.macro_weights.as_str(),
            self.micro.as_str(),
            self.scoped_equip.as_str(),
            self.scoped_strat.as_str(),
        ]
    }
}

/// Options for compiling a profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompileOptions {
    pub sheets: SheetNames,
    /// Spaces per nesting level in the rendered literal.
    pub indent: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            sheets: SheetNames::default(),
            indent: DEFAULT_INDENT,
        }
    }
}

/// Load options from a JSON file. Missing fields take their defaults.
pub fn load_options(path: &Path) -> Result<CompileOptions, ProfileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ProfileError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let options: CompileOptions =
        serde_json::from_str(&content).map_err(|e| ProfileError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_options(&options)?;
    Ok(options)
}

/// Parse options from a JSON string (no file path context).
pub fn parse_options_str(json: &str) -> Result<CompileOptions, ProfileError> {
    let options: CompileOptions = serde_json::from_str(json)?;
    validate_options(&options)?;
    Ok(options)
}

pub fn validate_options(options: &CompileOptions) -> Result<(), ProfileError> {
    if !(1..=8).contains(&options.indent) {
        return Err(ProfileError::ConfigInvalid(format!(
            "indent must be between 1 and 8, got {}",
            options.indent
        )));
    }

    let names = options.sheets.all();
    for (i, name) in names.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(ProfileError::ConfigInvalid(
                "sheet names must not be empty".into(),
            ));
        }
        if names[..i].contains(name) {
            return Err(ProfileError::ConfigInvalid(format!(
                "sheet '{}' is assigned to more than one section",
                name
            )));
        }
    }

    Ok(())
}
