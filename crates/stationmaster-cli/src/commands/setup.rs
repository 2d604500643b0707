// Rust guideline compliant 2026-08-23

//! Implementation of the `stationmaster setup` command.
//!
//! Creates a new, empty boarding config file for storing boarding
//! information. Refuses to overwrite an existing file.

use anyhow::Result;
use std::path::Path;

/// Creates an empty boarding config file at the given path.
///
/// # Errors
///
/// Returns an error if a file already exists at the path or the document
/// cannot be written.
pub fn execute(file: &Path) -> Result<()> {
    let registry = super::registry(file)?;
    registry.setup()?;

    println!("✓ Created boarding config file: {}", file.display());
    Ok(())
}
