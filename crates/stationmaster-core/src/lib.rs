// Rust guideline compliant 2026-08-23

//! Stationmaster Core Library
//!
//! This crate provides the foundational components for the Stationmaster
//! feature-flag lifecycle manager:
//! - Data models (BoardingTicket, BoardingConfig, TicketState)
//! - Config store (atomic JSON document load/save, file locking)
//! - Lifecycle policy (default expirations, effective state, expiry
//!   parsing, boarding gate)
//! - Flag registry (create/update/show/board/list)
//! - Error types and result handling

pub mod error;
pub mod models;
pub mod policy;
pub mod registry;
pub mod store;

pub use error::{Error, Result};
pub use models::{BoardingConfig, BoardingTicket, TicketMap, TicketState, SCHEMA_VERSION};
pub use policy::ExpiryStatus;
pub use registry::{
    BoardOutcome, CreateOptions, FlagRegistry, RegistryConfig, TicketList, TicketView,
    UpdateOptions,
};
pub use store::ConfigStore;
