//! Loading registration settings from a TOML file.

use std::io::Write;

use herald_gateway::{GatewayError, HeraldConfig, Registry};
use pretty_assertions::assert_eq;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_registry_from_config_file() {
    let file = write_config(
        r#"
search_paths = ["bots.commands.", "bots.events."]
log_discovery_errors = true
"#,
    );

    let config = HeraldConfig::load(file.path()).unwrap();
    let registry = Registry::from_config(&config).unwrap();

    let paths: Vec<_> = registry.search_paths().collect();
    assert_eq!(paths, vec!["bots.commands.", "bots.events."]);
    assert!(registry.log_discovery_errors());
}

#[test]
fn test_custom_separator_from_config_file() {
    let file = write_config(
        r#"
package_separator = ":"
search_paths = ["bots:commands:"]
"#,
    );

    let config = HeraldConfig::load(file.path()).unwrap();
    let registry = Registry::from_config(&config).unwrap();

    assert_eq!(registry.separator(), ':');
    assert!(registry.has_search_path("bots:commands:"));
}

#[test]
fn test_invalid_search_path_in_config_file() {
    let file = write_config(r#"search_paths = ["bots.commands"]"#);

    let config = HeraldConfig::load(file.path()).unwrap();
    let err = Registry::from_config(&config).unwrap_err();

    assert!(matches!(err, GatewayError::Command(e) if e.is_invalid_argument()));
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = HeraldConfig::load(dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, GatewayError::Io(_)));
}
