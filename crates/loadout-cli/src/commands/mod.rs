pub mod compile;
pub mod inspect;
pub mod rules;

use loadout_core::error::ProfileError;
use loadout_core::options::{self, CompileOptions};
use std::path::Path;

/// Options from `--config`, or the defaults when no file is given.
fn load_options(config: Option<&Path>) -> Result<CompileOptions, ProfileError> {
    match config {
        Some(path) => options::load_options(path),
        None => Ok(CompileOptions::default()),
    }
}
