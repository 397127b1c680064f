//! Loading files from disk and choosing the grammar.

use std::path::{Path, PathBuf};

use rstest::rstest;
use xstate_nav::syntax::{FileExtension, ParseError, load_and_parse};

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/machine.ts")
}

// =============================================================================
// GRAMMAR SELECTION
// =============================================================================

#[rstest]
#[case("machine.ts", Some(FileExtension::TypeScript))]
#[case("machine.mts", Some(FileExtension::TypeScript))]
#[case("machine.cjs", Some(FileExtension::TypeScript))]
#[case("machine.js", Some(FileExtension::TypeScript))]
#[case("Machine.tsx", Some(FileExtension::Tsx))]
#[case("Machine.jsx", Some(FileExtension::Tsx))]
#[case("machine.json", None)]
#[case("Makefile", None)]
fn test_extension_from_path(#[case] path: &str, #[case] expected: Option<FileExtension>) {
    assert_eq!(FileExtension::from_path(Path::new(path)), expected);
}

// =============================================================================
// LOADING
// =============================================================================

#[test]
fn test_load_fixture() {
    let file = load_and_parse(&fixture_path()).expect("fixture should load");
    assert_eq!(file.extension(), FileExtension::TypeScript);
    assert!(!file.has_errors());
    assert!(file.text().contains("createMachine"));
}

#[test]
fn test_load_missing_file() {
    let err = load_and_parse(Path::new("does/not/exist.ts")).unwrap_err();
    assert!(matches!(err, ParseError::Io { .. }), "{err:?}");
}

#[test]
fn test_load_unsupported_extension() {
    let err = load_and_parse(Path::new("machine.json")).unwrap_err();
    assert!(matches!(err, ParseError::UnsupportedExtension { .. }), "{err:?}");
}
