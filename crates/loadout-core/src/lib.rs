pub mod assemble;
pub mod error;
pub mod model;
pub mod options;
pub mod readers;
pub mod render;
pub mod rules;
pub mod source;
pub mod write;

use std::path::Path;

use assemble::Sections;
use error::ProfileError;
use model::Profile;
use options::CompileOptions;
use render::Value;
use source::TableSource;

/// Read every section from `source` and resolve them into a profile.
///
/// Sheets are read in order META, MACRO, MICRO, SCOPED_EQUIP, SCOPED_STRAT
/// (or their configured names); the first missing one is reported.
pub fn compile_profile(
    source: &dyn TableSource,
    options: &CompileOptions,
) -> Result<Profile, ProfileError> {
    let sheets = &options.sheets;

    let meta = readers::read_meta(&source.sheet(&sheets.meta)?);
    let (macro_weights, _) =
        readers::read_macro(&sheets.macro_weights, &source.sheet(&sheets.macro_weights)?);
    let (micro, _) = readers::read_micro(&sheets.micro, &source.sheet(&sheets.micro)?);
    let (equipment, _) =
        readers::read_scoped_equipment(&sheets.scoped_equip, &source.sheet(&sheets.scoped_equip)?);
    let (stratagems, _) =
        readers::read_scoped_stratagems(&sheets.scoped_strat, &source.sheet(&sheets.scoped_strat)?);

    assemble::assemble(Sections {
        meta,
        macro_weights,
        micro,
        equipment,
        stratagems,
    })
}

/// Render a profile as `export default { ... };\n`.
pub fn render_profile(profile: &Profile, options: &CompileOptions) -> Result<String, ProfileError> {
    render::render_document(&Value::from(profile), options.indent)
}

/// Compile `source` to the profile module text.
pub fn compile(source: &dyn TableSource, options: &CompileOptions) -> Result<String, ProfileError> {
    let profile = compile_profile(source, options)?;
    render_profile(&profile, options)
}

/// Compile `source` and write the module to `output`.
///
/// The document is rendered completely before the output file is touched.
pub fn compile_to_file(
    source: &dyn TableSource,
    options: &CompileOptions,
    output: &Path,
) -> Result<Profile, ProfileError> {
    let profile = compile_profile(source, options)?;
    let text = render_profile(&profile, options)?;
    write::write_artifact(output, &text)?;

    tracing::info!(
        source = source.source_name(),
        output = %output.display(),
        profile = %profile.name,
        rules = %profile.rules_block,
        "compiled profile"
    );
    Ok(profile)
}
