// Rust guideline compliant 2026-08-23

//! Implementation of the `stationmaster show` command.
//!
//! Displays a boarding ticket's stored fields plus derived reporting: the
//! effective state and how far the ticket is from its expiration.

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::path::Path;

/// Shows a boarding ticket by name.
///
/// # Errors
///
/// Returns an error if the boarding config file or the ticket does not
/// exist.
pub fn execute(file: &Path, name: String) -> Result<()> {
    let registry = super::registry(file)?;
    let view = registry.show(&name)?;
    let ticket = &view.ticket;

    println!("Boarding ticket: {}", ticket.name);
    println!("  State: {}", view.effective_state);
    println!(
        "  Enabled: {}",
        if ticket.enabled { "yes" } else { "no" }
    );
    if let Some(expiration) = ticket.expiration {
        println!("  Expiration: {}", format_timestamp(expiration));
    }
    if let Some(expiry) = view.expiry {
        println!("  Expiry: {}", expiry);
    }
    if let Some(description) = &ticket.description {
        println!("  Description: {}", description);
    }
    if let Some(tracking) = &ticket.tracking_ticket {
        println!("  Tracking ticket: {}", tracking);
    }
    if let Some(version) = &ticket.target_version {
        println!("  Target version: {}", version);
    }
    println!("  Created: {}", format_timestamp(ticket.created_at));
    println!("  Updated: {}", format_timestamp(ticket.updated_at));

    Ok(())
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
