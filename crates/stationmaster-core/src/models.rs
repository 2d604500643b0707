// Rust guideline compliant 2026-08-23

//! Core data models for Stationmaster.

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Current boarding config document schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Lifecycle state of a boarding ticket.
///
/// `Expired` is a derived state (see [`crate::policy::effective_state`]);
/// the registry never stores it, but it is accepted on deserialization so
/// documents written by future versions still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketState {
    /// Ticket is enabled and within its expiration window.
    Active,
    /// Ticket has been manually disabled.
    Disabled,
    /// Ticket is past its expiration (derived, not stored).
    Expired,
    /// Feature fully adopted and flag checks removed. Terminal.
    Boarded,
}

impl fmt::Display for TicketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Active => "active",
            Self::Disabled => "disabled",
            Self::Expired => "expired",
            Self::Boarded => "boarded",
        };
        f.write_str(label)
    }
}

/// A boarding ticket: one feature flag plus its metadata.
///
/// The name doubles as the document map key, so it is skipped during value
/// serialization and restored from the key on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardingTicket {
    /// Unique, case-sensitive identifier. No whitespace allowed.
    #[serde(skip)]
    pub name: String,
    /// Whether code guarded by this flag is currently enabled.
    pub enabled: bool,
    /// When the ticket expires. Populated at creation (default now + 30d).
    pub expiration: Option<DateTime<Utc>>,
    /// Free-text description of what the flag guards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// External tracking ticket reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_ticket: Option<String>,
    /// Version in which the feature is expected to land.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_version: Option<String>,
    /// Stored lifecycle state. Only `Active`, `Disabled`, or `Boarded` are
    /// ever written by the registry.
    pub state: TicketState,
    /// When the ticket was created. Registry-managed.
    pub created_at: DateTime<Utc>,
    /// When the ticket was last mutated. Registry-managed.
    pub updated_at: DateTime<Utc>,
}

impl BoardingTicket {
    /// Validates ticket invariants.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is empty or contains
    /// whitespace.
    pub fn validate(&self) -> crate::Result<()> {
        validate_name(&self.name)
    }

    /// True once the ticket has reached its terminal state.
    pub fn is_boarded(&self) -> bool {
        self.state == TicketState::Boarded
    }
}

/// Validates a ticket name: non-empty, no whitespace.
///
/// # Errors
///
/// Returns a validation error naming the `name` field otherwise.
pub fn validate_name(name: &str) -> crate::Result<()> {
    if name.is_empty() {
        return Err(crate::Error::validation(
            "name",
            "ticket name cannot be empty",
        ));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(crate::Error::validation(
            "name",
            format!("ticket name '{}' contains whitespace", name),
        ));
    }
    Ok(())
}

/// Insertion-ordered mapping from ticket name to ticket.
///
/// Serializes as a JSON object keyed by name, preserving insertion order,
/// which is the order `list` reports tickets in. Duplicate keys are
/// rejected on load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketMap {
    tickets: Vec<BoardingTicket>,
}

impl TicketMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a ticket by name.
    pub fn get(&self, name: &str) -> Option<&BoardingTicket> {
        self.tickets.iter().find(|t| t.name == name)
    }

    /// Looks up a ticket by name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut BoardingTicket> {
        self.tickets.iter_mut().find(|t| t.name == name)
    }

    /// Returns true if a ticket with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Appends a ticket, keyed by its name.
    ///
    /// # Errors
    ///
    /// Returns a duplicate-ticket error if the name is already present.
    pub fn insert(&mut self, ticket: BoardingTicket) -> crate::Result<()> {
        if self.contains(&ticket.name) {
            return Err(crate::Error::DuplicateTicket(ticket.name));
        }
        self.tickets.push(ticket);
        Ok(())
    }

    /// Iterates tickets in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, BoardingTicket> {
        self.tickets.iter()
    }

    /// Number of tickets in the map.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Returns true if the map holds no tickets.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

impl Serialize for TicketMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tickets.len()))?;
        for ticket in &self.tickets {
            map.serialize_entry(&ticket.name, ticket)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TicketMap {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        struct TicketMapVisitor;

        impl<'de> Visitor<'de> for TicketMapVisitor {
            type Value = TicketMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of ticket name to ticket fields")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut tickets: Vec<BoardingTicket> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, mut ticket)) =
                    access.next_entry::<String, BoardingTicket>()?
                {
                    if tickets.iter().any(|t| t.name == name) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate boarding ticket name '{}'",
                            name
                        )));
                    }
                    ticket.name = name;
                    tickets.push(ticket);
                }
                Ok(TicketMap { tickets })
            }
        }

        deserializer.deserialize_map(TicketMapVisitor)
    }
}

/// The persisted boarding config document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardingConfig {
    /// Document schema version, for forward compatibility.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    /// All boarding tickets, keyed by name, in insertion order.
    #[serde(default)]
    pub tickets: TicketMap,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl Default for BoardingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardingConfig {
    /// Creates an empty document at the current schema version.
    pub fn new() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            tickets: TicketMap::new(),
        }
    }
}
