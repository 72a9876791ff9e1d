use crate::config::{ConfigError, ConfigManager, Settings};
use crate::core::types::Modifier;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper: manager pointing into a fresh temp directory
fn manager_in_temp() -> (TempDir, ConfigManager) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("clean-lock.conf");
    (temp_dir, ConfigManager::new(config_path))
}

#[test]
fn test_missing_file_yields_defaults() {
    let (_temp_dir, manager) = manager_in_temp();

    assert!(!manager.exists());

    let settings = manager.load_or_default().unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_missing_file_is_not_found() {
    let (_temp_dir, manager) = manager_in_temp();

    assert!(matches!(manager.load(), Err(ConfigError::NotFound(_))));
}

#[test]
fn test_load_reads_existing_file() {
    let (_temp_dir, manager) = manager_in_temp();
    fs::write(manager.path(), "hold_seconds = 3.0\nmodifier = SHIFT\n").unwrap();

    let settings = manager.load().unwrap();
    assert_eq!(settings.hold_seconds, 3.0);
    assert_eq!(settings.modifier, Modifier::Shift);
}

#[test]
fn test_load_rejects_invalid_content() {
    let (_temp_dir, manager) = manager_in_temp();
    fs::write(manager.path(), "hold_seconds = banana\n").unwrap();

    assert!(matches!(manager.load(), Err(ConfigError::Parse(_))));
    assert!(
        matches!(manager.load_or_default(), Err(ConfigError::Parse(_))),
        "a present config must be a valid one"
    );
}

#[test]
fn test_load_rejects_out_of_range_values() {
    let (_temp_dir, manager) = manager_in_temp();
    fs::write(manager.path(), "hold_seconds = 900\n").unwrap();

    assert!(matches!(manager.load(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_write_default_round_trips() {
    let (_temp_dir, manager) = manager_in_temp();

    manager.write_default(false).unwrap();
    assert!(manager.exists());

    // The template must parse back to the built-in defaults
    let settings = manager.load().unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_write_default_refuses_overwrite() {
    let (_temp_dir, manager) = manager_in_temp();
    fs::write(manager.path(), "hold_seconds = 3.0\n").unwrap();

    assert!(matches!(
        manager.write_default(false),
        Err(ConfigError::AlreadyExists(_))
    ));

    // Untouched without --force
    let settings = manager.load().unwrap();
    assert_eq!(settings.hold_seconds, 3.0);
}

#[test]
fn test_write_default_force_overwrites() {
    let (_temp_dir, manager) = manager_in_temp();
    fs::write(manager.path(), "hold_seconds = 3.0\n").unwrap();

    manager.write_default(true).unwrap();

    let settings = manager.load().unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_write_default_creates_parent_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("deep").join("nested").join("clean-lock.conf");
    let manager = ConfigManager::new(nested);

    manager.write_default(false).unwrap();
    assert!(manager.exists());
}

#[test]
fn test_default_path_is_expanded() {
    let path = ConfigManager::default_path();

    assert!(
        !path.starts_with(PathBuf::from("~")),
        "tilde must be expanded, got {}",
        path.display()
    );
    assert!(path.ends_with("clean-lock/clean-lock.conf"));
}
