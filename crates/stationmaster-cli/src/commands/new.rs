// Rust guideline compliant 2026-08-23

//! Implementation of the `stationmaster new` command.
//!
//! Creates a new boarding ticket with the supplied metadata, applying
//! lifecycle defaults (enabled, expiration 30 days out) for anything
//! omitted.

use anyhow::Result;
use stationmaster_core::CreateOptions;
use std::path::Path;

/// Creates a new boarding ticket.
///
/// # Arguments
///
/// * `file` - The boarding config file
/// * `name` - The ticket name
/// * `enable` - Whether the ticket starts enabled
/// * `expiration` - Optional expiration (timestamp or relative duration)
/// * `description` - Optional description
/// * `ticket` - Optional tracking ticket reference
/// * `target_version` - Optional target version
///
/// # Errors
///
/// Returns an error if:
/// - The boarding config file does not exist
/// - A ticket with the name already exists
/// - The name or expiration fails validation
pub fn execute(
    file: &Path,
    name: String,
    enable: bool,
    expiration: Option<String>,
    description: Option<String>,
    ticket: Option<String>,
    target_version: Option<String>,
) -> Result<()> {
    let registry = super::registry(file)?;

    let created = registry.create(
        &name,
        CreateOptions {
            enabled: enable,
            expiration,
            description,
            tracking_ticket: ticket,
            target_version,
        },
    )?;

    println!("✓ Created boarding ticket: {}", created.name);
    println!(
        "  Enabled: {}",
        if created.enabled { "yes" } else { "no" }
    );
    if let Some(expiration) = created.expiration {
        println!("  Expiration: {}", expiration.to_rfc3339());
    }
    if let Some(description) = &created.description {
        println!("  Description: {}", description);
    }
    if let Some(tracking) = &created.tracking_ticket {
        println!("  Tracking ticket: {}", tracking);
    }
    if let Some(version) = &created.target_version {
        println!("  Target version: {}", version);
    }

    Ok(())
}
