// Rust guideline compliant 2026-08-23

//! Command implementations for the Stationmaster CLI.

pub mod board;
pub mod list;
pub mod new;
pub mod setup;
pub mod show;
pub mod update;

use stationmaster_core::{FlagRegistry, RegistryConfig};
use std::path::Path;

/// Builds a registry over the given boarding config file.
pub(crate) fn registry(file: &Path) -> anyhow::Result<FlagRegistry> {
    let registry = FlagRegistry::new(RegistryConfig {
        file: file.to_path_buf(),
        ..RegistryConfig::default()
    })?;
    Ok(registry)
}

/// Builds a registry with the boarding gate configured.
pub(crate) fn registry_with_gate(
    file: &Path,
    require_disabled: bool,
) -> anyhow::Result<FlagRegistry> {
    let registry = FlagRegistry::new(RegistryConfig {
        file: file.to_path_buf(),
        require_disabled_before_board: require_disabled,
    })?;
    Ok(registry)
}
