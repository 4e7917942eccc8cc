use loadout_core::error::ProfileError;
use loadout_core::source::XlsxSource;
use std::path::PathBuf;

pub fn run(
    input_file: PathBuf,
    output_file: PathBuf,
    config: Option<PathBuf>,
) -> Result<(), ProfileError> {
    let options = super::load_options(config.as_deref())?;
    tracing::debug!(input = %input_file.display(), "opening workbook");
    let source = XlsxSource::open(&input_file)?;

    loadout_core::compile_to_file(&source, &options, &output_file)?;

    println!("Wrote: {}", output_file.display());
    Ok(())
}
