// Rust guideline compliant 2026-08-23

//! Implementation of the `stationmaster list` command.
//!
//! Lists all boarding tickets in insertion order, annotated with their
//! effective state and expiry position.

use anyhow::Result;
use std::path::Path;
use tabled::{builder::Builder, settings::Style};

/// Lists all boarding tickets.
///
/// # Errors
///
/// Returns an error if the boarding config file does not exist or is
/// malformed.
pub fn execute(file: &Path) -> Result<()> {
    let registry = super::registry(file)?;
    let list = registry.list()?;

    if list.is_empty() {
        println!("No boarding tickets in {}", file.display());
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["NAME", "STATE", "ENABLED", "EXPIRY", "TICKET", "TARGET"]);

    for view in list.iter() {
        let ticket = &view.ticket;
        builder.push_record([
            ticket.name.clone(),
            view.effective_state.to_string(),
            if ticket.enabled { "yes" } else { "no" }.to_string(),
            view.expiry
                .map(|e| e.to_string())
                .unwrap_or_else(|| "-".to_string()),
            ticket.tracking_ticket.clone().unwrap_or_else(|| "-".to_string()),
            ticket.target_version.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    println!("{}", table);

    Ok(())
}
