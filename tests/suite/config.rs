//! Config file loading.

use std::fs;

use folio_engine::{ConfigError, FolioConfig};
use tempfile::tempdir;

const SAMPLE: &str = r#"
[app]
theme = "light"
ascii_only = true
high_contrast = false

[emailjs]
public_key = "pk_from_file"
service_id = "service_abc"
template_id = "template_xyz"
to_name = "Adrian"
api_base = "https://api.emailjs.com"
timeout_secs = 12
"#;

#[test]
fn sample_config_parses() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, SAMPLE).unwrap();

    let config = FolioConfig::load_from(&path).expect("sample parses");
    let app = config.app.as_ref().unwrap();
    assert_eq!(app.theme.as_deref(), Some("light"));
    assert!(app.ascii_only);

    let emailjs = config.emailjs.as_ref().unwrap();
    assert_eq!(emailjs.service_id.as_deref(), Some("service_abc"));
    assert_eq!(emailjs.timeout_secs, Some(12));
    assert_eq!(FolioConfig::to_name(Some(&config)), "Adrian");

    let options = FolioConfig::ui_options(Some(&config));
    assert!(options.ascii_only);
    assert!(!options.high_contrast);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = FolioConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn unknown_keys_are_tolerated() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[app]\nfuture_option = 1\n").unwrap();

    assert!(FolioConfig::load_from(&path).is_ok());
}

#[test]
fn empty_file_is_all_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    let config = FolioConfig::load_from(&path).unwrap();
    assert!(config.app.is_none());
    assert!(config.emailjs.is_none());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[emailjs\nservice_id = ").unwrap();

    let err = FolioConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), &path);
}
