use std::io::Write;
use std::path::Path;

use crate::error::ProfileError;

/// Write `contents` to `path` via a temp file in the same directory.
///
/// The target only ever holds a complete document: either the rename
/// succeeds or the temp file is dropped and removed.
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), ProfileError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| ProfileError::Io(e.error))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}
