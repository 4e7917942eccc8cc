use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("required sheet '{sheet}' not found in workbook")]
    MissingSection { sheet: String },

    #[error("failed to read workbook: {0}")]
    Workbook(String),

    #[error("unsupported value in profile: {0}")]
    UnsupportedValue(String),

    #[error("failed to load options from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("invalid options: {0}")]
    ConfigInvalid(String),

    #[error("invalid rules preset: {0}")]
    Preset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
