use loadout_core::error::ProfileError;
use loadout_core::source::XlsxSource;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    config: Option<PathBuf>,
) -> Result<(), ProfileError> {
    let options = super::load_options(config.as_deref())?;
    tracing::debug!(input = %input_file.display(), "opening workbook");
    let source = XlsxSource::open(&input_file)?;
    let profile = loadout_core::compile_profile(&source, &options)?;

    match output_format {
        "json" => output::json::print(&profile)?,
        _ => print!("{}", output::table::format_summary(&profile)),
    }

    Ok(())
}
