// Rust guideline compliant 2026-08-23

//! Implementation of the `stationmaster board` command.
//!
//! Marks a feature as fully adopted: the flag's guarding code is assumed
//! removed, and the ticket moves to its terminal `Boarded` state. Boarding
//! an already-boarded ticket is a no-op success.

use anyhow::Result;
use std::path::Path;

/// Boards a feature by name.
///
/// # Arguments
///
/// * `file` - The boarding config file
/// * `name` - The ticket name
/// * `require_disabled` - Reject boarding while the ticket is still
///   enabled
///
/// # Errors
///
/// Returns an error if the boarding config file or the ticket does not
/// exist, or if the boarding gate rejects a still-enabled ticket.
pub fn execute(file: &Path, name: String, require_disabled: bool) -> Result<()> {
    let registry = super::registry_with_gate(file, require_disabled)?;
    let outcome = registry.board(&name)?;

    if outcome.newly_boarded {
        println!("✓ Boarded feature: {}", outcome.ticket.name);
        println!("  Make sure all checks of '{}' are removed from the code.", name);
    } else {
        println!("Feature '{}' is already boarded; nothing to do.", name);
    }

    Ok(())
}
