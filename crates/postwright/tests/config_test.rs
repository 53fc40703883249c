//! Tests for configuration loading.

use postwright::{CliConfig, LogFormat, OutputFormat};
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp config");
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
default_platform = "instagram"
output = "json"
strict = true
log_level = "debug"
log_format = "json"
"#,
    );

    let config = CliConfig::load(Some(file.path())).expect("Config should load");
    assert_eq!(config.default_platform().as_deref(), Some("instagram"));
    assert_eq!(*config.output(), OutputFormat::Json);
    assert!(*config.strict());
    assert_eq!(config.log_level(), "debug");
    assert_eq!(*config.log_format(), LogFormat::Json);
}

#[test]
fn test_missing_keys_use_defaults() {
    let file = write_config("strict = true\n");
    let config = CliConfig::load(Some(file.path())).expect("Config should load");
    assert!(config.default_platform().is_none());
    assert_eq!(*config.output(), OutputFormat::Human);
    assert_eq!(config.log_level(), "info");
}

#[test]
fn test_unknown_default_platform_rejected() {
    let file = write_config("default_platform = \"myspace\"\n");
    let err = CliConfig::load(Some(file.path())).unwrap_err();
    assert!(err.to_string().contains("myspace"));
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("nope.toml");
    assert!(CliConfig::load(Some(missing.as_path())).is_err());
}

#[test]
fn test_bad_output_format_is_an_error() {
    let file = write_config("output = \"xml\"\n");
    assert!(CliConfig::load(Some(file.path())).is_err());
}
