//! Plugin manifest loading through configuration
//!
//! Run with: cargo test --test plugin_manifest_tests

use rustcalc::{CalcConfig, CalcError, Calculator, Decimal, PluginManifest};
use std::io::Write;
use tempfile::NamedTempFile;

fn manifest_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_calculator_from_manifest() {
    let file = manifest_file(
        r#"{"operations": [{"name": "plus", "kind": "add"}, {"name": "times", "kind": "multiply"}]}"#,
    );

    let config = CalcConfig::new().plugin_manifest(file.path());
    let mut calc = Calculator::from_config(&config).unwrap();

    assert_eq!(
        calc.operations(),
        vec!["add", "divide", "multiply", "plus", "subtract", "times"]
    );
    assert_eq!(calc.execute("plus", 2, 3).unwrap(), Decimal::from(5));
    assert_eq!(calc.execute("TIMES", 4, 3).unwrap(), Decimal::from(12));
    assert_eq!(calc.last().unwrap().operation, "times");
}

#[test]
fn test_manifest_without_builtins() {
    let file = manifest_file(
        r#"{"include_builtins": false, "operations": [{"name": "over", "kind": "divide"}]}"#,
    );

    let config = CalcConfig::new().plugin_manifest(file.path());
    let mut calc = Calculator::from_config(&config).unwrap();

    assert_eq!(calc.operations(), vec!["over"]);
    assert_eq!(calc.execute("over", 1, 0).unwrap_err(), CalcError::DivisionByZero);
    assert_eq!(
        calc.execute("divide", 1, 1).unwrap_err(),
        CalcError::OperationNotFound("divide".into())
    );
}

#[test]
fn test_duplicate_in_manifest_aborts_startup() {
    let file = manifest_file(r#"{"operations": [{"name": "Divide", "kind": "multiply"}]}"#);

    let config = CalcConfig::new().plugin_manifest(file.path());
    let err = Calculator::from_config(&config).err().unwrap();
    assert_eq!(err, CalcError::DuplicateRegistration("divide".into()));
}

#[test]
fn test_invalid_manifest_files() {
    let file = manifest_file("operations: [add]");
    let err = PluginManifest::load(file.path()).unwrap_err();
    assert!(matches!(err, CalcError::InvalidPlugin(_)));

    let err = PluginManifest::load("/nonexistent/rustcalc/plugins.json").unwrap_err();
    assert!(matches!(err, CalcError::Io(_)));
}
