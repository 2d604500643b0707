// Rust guideline compliant 2026-08-23

//! Implementation of the `stationmaster update` command.
//!
//! Applies a partial update to an existing boarding ticket: only the
//! options supplied on the command line change; everything else keeps its
//! previous value.

use anyhow::Result;
use stationmaster_core::UpdateOptions;
use std::path::Path;

/// Updates a boarding ticket with the supplied field changes.
///
/// # Errors
///
/// Returns an error if:
/// - The boarding config file does not exist
/// - The ticket is not found
/// - A supplied expiration fails validation
pub fn execute(
    file: &Path,
    name: String,
    enable: Option<bool>,
    expiration: Option<String>,
    description: Option<String>,
    ticket: Option<String>,
    target_version: Option<String>,
) -> Result<()> {
    let registry = super::registry(file)?;

    let updated = registry.update(
        &name,
        UpdateOptions {
            enabled: enable,
            expiration,
            description,
            tracking_ticket: ticket,
            target_version,
        },
    )?;

    println!("✓ Updated boarding ticket: {}", updated.name);
    println!(
        "  Enabled: {}",
        if updated.enabled { "yes" } else { "no" }
    );
    if let Some(expiration) = updated.expiration {
        println!("  Expiration: {}", expiration.to_rfc3339());
    }
    if let Some(description) = &updated.description {
        println!("  Description: {}", description);
    }
    if let Some(tracking) = &updated.tracking_ticket {
        println!("  Tracking ticket: {}", tracking);
    }
    if let Some(version) = &updated.target_version {
        println!("  Target version: {}", version);
    }

    Ok(())
}
