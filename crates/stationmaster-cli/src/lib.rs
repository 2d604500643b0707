// Rust guideline compliant 2026-08-23

//! Stationmaster CLI Application
//!
//! Thin command-line interface over the Stationmaster flag registry. All
//! lifecycle semantics live in `stationmaster-core`; this crate parses
//! arguments, builds a registry, and prints results.

pub mod commands;
