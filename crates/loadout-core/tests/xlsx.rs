//! Compiles a checked-in workbook through the calamine backend and compares
//! the result byte-for-byte with the expected module.

use std::path::PathBuf;

use loadout_core::options::CompileOptions;
use loadout_core::source::{TableSource, XlsxSource};
use loadout_core::{compile, compile_to_file};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn workbook_compiles_to_expected_module() {
    let source = XlsxSource::open(&fixture("balanced.xlsx")).unwrap();
    let expected = std::fs::read_to_string(fixture("balanced.profile.js")).unwrap();

    let text = compile(&source, &CompileOptions::default()).unwrap();
    assert_eq!(text, expected);
}

#[test]
fn workbook_rows_are_anchored_at_a1() {
    let source = XlsxSource::open(&fixture("balanced.xlsx")).unwrap();
    let meta = source.sheet("META").unwrap();
    assert_eq!(meta[0][1].text().as_deref(), Some("Balanced"));
    assert_eq!(meta[1][1].text().as_deref(), Some("true"));
}

#[test]
fn compile_to_file_matches_expected_module() {
    let source = XlsxSource::open(&fixture("balanced.xlsx")).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("balanced.profile.js");

    compile_to_file(&source, &CompileOptions::default(), &out).unwrap();

    let expected = std::fs::read_to_string(fixture("balanced.profile.js")).unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), expected);
}

#[test]
fn missing_workbook_is_io_error() {
    let err = XlsxSource::open(&fixture("nope.xlsx")).unwrap_err();
    assert!(matches!(err, loadout_core::error::ProfileError::Io(_)));
}
