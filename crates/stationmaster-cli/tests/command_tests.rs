// Rust guideline compliant 2026-08-23

//! Integration tests for CLI commands.
//!
//! These tests drive the command implementations against temp-file-backed
//! boarding configs and verify the persisted results through the core API.

use stationmaster_cli::commands;
use stationmaster_core::{FlagRegistry, RegistryConfig, TicketState};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builds a registry for inspecting state the commands persisted.
fn inspect(file: &Path) -> FlagRegistry {
    FlagRegistry::new(RegistryConfig {
        file: file.to_path_buf(),
        ..RegistryConfig::default()
    })
    .expect("Failed to create registry")
}

fn config_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("boarding.conf")
}

#[test]
fn test_setup_creates_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let file = config_path(&temp_dir);

    commands::setup::execute(&file).expect("setup should succeed");

    assert!(file.exists(), "boarding.conf should exist after setup");
    let content = fs::read_to_string(&file).expect("Failed to read boarding.conf");
    assert!(
        content.contains("schema_version"),
        "document should carry a schema version"
    );

    // Running setup again must refuse to clobber.
    let result = commands::setup::execute(&file);
    assert!(result.is_err(), "setup over an existing file should fail");
}

#[test]
fn test_new_persists_ticket_with_metadata() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let file = config_path(&temp_dir);
    commands::setup::execute(&file).expect("setup should succeed");

    commands::new::execute(
        &file,
        "dark-mode".to_string(),
        true,
        Some("30 days".to_string()),
        Some("dark theme rollout".to_string()),
        Some("PROJ-42".to_string()),
        Some("2.1.0".to_string()),
    )
    .expect("new should succeed");

    let view = inspect(&file).show("dark-mode").expect("ticket should exist");
    assert!(view.ticket.enabled);
    assert_eq!(view.effective_state, TicketState::Active);
    assert_eq!(view.ticket.description.as_deref(), Some("dark theme rollout"));
    assert_eq!(view.ticket.tracking_ticket.as_deref(), Some("PROJ-42"));
    assert_eq!(view.ticket.target_version.as_deref(), Some("2.1.0"));
}

#[test]
fn test_new_without_setup_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let file = config_path(&temp_dir);

    let result = commands::new::execute(
        &file,
        "dark-mode".to_string(),
        true,
        None,
        None,
        None,
        None,
    );
    assert!(result.is_err(), "new without a config file should fail");
}

#[test]
fn test_new_duplicate_name_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let file = config_path(&temp_dir);
    commands::setup::execute(&file).expect("setup should succeed");

    commands::new::execute(&file, "dark-mode".to_string(), true, None, None, None, None)
        .expect("first new should succeed");
    let result =
        commands::new::execute(&file, "dark-mode".to_string(), true, None, None, None, None);
    assert!(result.is_err(), "duplicate names should be rejected");
}

#[test]
fn test_update_disables_ticket() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let file = config_path(&temp_dir);
    commands::setup::execute(&file).expect("setup should succeed");
    commands::new::execute(&file, "dark-mode".to_string(), true, None, None, None, None)
        .expect("new should succeed");

    commands::update::execute(
        &file,
        "dark-mode".to_string(),
        Some(false),
        None,
        None,
        None,
        None,
    )
    .expect("update should succeed");

    let view = inspect(&file).show("dark-mode").expect("ticket should exist");
    assert!(!view.ticket.enabled);
    assert_eq!(view.effective_state, TicketState::Disabled);
}

#[test]
fn test_board_then_board_again_is_noop() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let file = config_path(&temp_dir);
    commands::setup::execute(&file).expect("setup should succeed");
    commands::new::execute(&file, "dark-mode".to_string(), true, None, None, None, None)
        .expect("new should succeed");

    commands::board::execute(&file, "dark-mode".to_string(), false)
        .expect("board should succeed");
    let first = inspect(&file).show("dark-mode").expect("ticket should exist");
    assert_eq!(first.effective_state, TicketState::Boarded);

    commands::board::execute(&file, "dark-mode".to_string(), false)
        .expect("second board should succeed");
    let second = inspect(&file).show("dark-mode").expect("ticket should exist");
    assert_eq!(second.ticket, first.ticket, "no-op board must not mutate");
}

#[test]
fn test_board_require_disabled_gate() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let file = config_path(&temp_dir);
    commands::setup::execute(&file).expect("setup should succeed");
    commands::new::execute(&file, "dark-mode".to_string(), true, None, None, None, None)
        .expect("new should succeed");

    let result = commands::board::execute(&file, "dark-mode".to_string(), true);
    assert!(result.is_err(), "gate should reject a still-enabled ticket");

    commands::update::execute(
        &file,
        "dark-mode".to_string(),
        Some(false),
        None,
        None,
        None,
        None,
    )
    .expect("update should succeed");
    commands::board::execute(&file, "dark-mode".to_string(), true)
        .expect("board should succeed once disabled");
}

#[test]
fn test_show_and_list_missing_entities_fail() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let file = config_path(&temp_dir);

    assert!(commands::show::execute(&file, "ghost".to_string()).is_err());
    assert!(commands::list::execute(&file).is_err());

    commands::setup::execute(&file).expect("setup should succeed");
    assert!(
        commands::show::execute(&file, "ghost".to_string()).is_err(),
        "show of a missing ticket should fail"
    );
    assert!(
        commands::list::execute(&file).is_ok(),
        "list of an empty document should succeed"
    );
}
