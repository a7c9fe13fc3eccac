//! Integration tests for Settings layered loading.
//!
//! These tests point `load_from` at a temp global config file instead of the
//! XDG location, so they never read the developer's real configuration.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use arbor::application::ApplicationError;
use arbor::config::{OutputStyle, Settings};

#[test]
fn given_missing_global_file_when_load_then_uses_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("arbor.toml");

    // Act
    let settings = Settings::load_from(Some(&missing)).expect("load settings");

    // Assert
    assert_eq!(settings.style, OutputStyle::Tree);
    assert!(settings.doubles_dir.ends_with("doubles"));
}

#[test]
fn given_global_file_with_style_when_load_then_overrides_default() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("arbor.toml");
    fs::write(&path, "style = \"plain\"\n").unwrap();

    // Act
    let settings = Settings::load_from(Some(&path)).expect("load settings");

    // Assert
    assert_eq!(settings.style, OutputStyle::Plain);
}

#[test]
fn given_global_file_with_doubles_dir_when_load_then_keeps_other_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("arbor.toml");
    let doubles = dir.path().join("my-doubles");
    fs::write(
        &path,
        format!("doubles_dir = {:?}\n", doubles.to_string_lossy()),
    )
    .unwrap();

    // Act
    let settings = Settings::load_from(Some(&path)).expect("load settings");

    // Assert
    assert_eq!(settings.doubles_dir, doubles);
    assert_eq!(settings.style, OutputStyle::Tree);
}

#[test]
fn given_malformed_global_file_when_load_then_config_error() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("arbor.toml");
    fs::write(&path, "style = [\n").unwrap();

    // Act
    let result = Settings::load_from(Some(&path));

    // Assert
    match result {
        Err(ApplicationError::Config { message }) => {
            assert!(message.contains("arbor.toml"), "message: {message}")
        }
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn given_settings_when_serialized_then_round_trips_through_toml() {
    let settings = Settings {
        doubles_dir: PathBuf::from("/srv/doubles"),
        style: OutputStyle::Plain,
    };

    let text = settings.to_toml().unwrap();

    assert!(text.contains("doubles_dir = \"/srv/doubles\""));
    assert!(text.contains("style = \"plain\""));
}
