// Rust guideline compliant 2026-08-23

//! The flag registry: lifecycle operations over the boarding config
//! document.
//!
//! Every mutating operation runs under the store's exclusive lock and
//! performs load → locate/validate → apply → atomic save, so the on-disk
//! document is the single source of truth and a validation failure never
//! leaves a partial write behind.

use crate::models::{BoardingConfig, BoardingTicket, TicketState};
use crate::store::ConfigStore;
use crate::{policy, Error, Result};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Explicit registry configuration, passed into the constructor instead of
/// living in ambient process state.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Path of the boarding config file to operate on.
    pub file: PathBuf,
    /// Reject boarding of tickets whose stored `enabled` flag is still
    /// true. Off by default: boarding is allowed unconditionally.
    pub require_disabled_before_board: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("boarding.conf"),
            require_disabled_before_board: false,
        }
    }
}

/// Options recognized by [`FlagRegistry::create`].
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Whether the new ticket starts enabled. Defaults to true.
    pub enabled: bool,
    /// Expiration as a timestamp or relative duration string. Defaults to
    /// 30 days from creation.
    pub expiration: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// External tracking ticket reference.
    pub tracking_ticket: Option<String>,
    /// Target version for the feature.
    pub target_version: Option<String>,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            expiration: None,
            description: None,
            tracking_ticket: None,
            target_version: None,
        }
    }
}

/// Options recognized by [`FlagRegistry::update`]. `None` means the field
/// keeps its previous value.
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    /// New enabled flag.
    pub enabled: Option<bool>,
    /// New expiration (timestamp or relative duration string).
    pub expiration: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New tracking ticket reference.
    pub tracking_ticket: Option<String>,
    /// New target version.
    pub target_version: Option<String>,
}

/// Read-only snapshot of a ticket plus derived reporting fields.
#[derive(Debug, Clone)]
pub struct TicketView {
    /// The stored ticket, verbatim.
    pub ticket: BoardingTicket,
    /// Effective state at snapshot time (may be `Expired` even when the
    /// stored state is not).
    pub effective_state: TicketState,
    /// Time remaining until expiration, or elapsed since.
    pub expiry: Option<policy::ExpiryStatus>,
}

impl TicketView {
    fn at(ticket: BoardingTicket, now: DateTime<Utc>) -> Self {
        let effective_state = policy::effective_state(&ticket, now);
        let expiry = policy::expiry_status(&ticket, now);
        Self {
            ticket,
            effective_state,
            expiry,
        }
    }
}

/// Outcome of a board operation.
#[derive(Debug, Clone)]
pub struct BoardOutcome {
    /// The ticket after the operation.
    pub ticket: BoardingTicket,
    /// False when the ticket was already boarded and nothing changed.
    pub newly_boarded: bool,
}

/// A finite, restartable snapshot of all tickets, in insertion order.
///
/// `iter` derives effective state and expiry lazily per ticket; calling it
/// again restarts iteration over the same snapshot.
#[derive(Debug, Clone)]
pub struct TicketList {
    tickets: Vec<BoardingTicket>,
    as_of: DateTime<Utc>,
}

impl TicketList {
    /// Iterates ticket views in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = TicketView> + '_ {
        let as_of = self.as_of;
        self.tickets.iter().map(move |t| TicketView::at(t.clone(), as_of))
    }

    /// Number of tickets in the snapshot.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Returns true if the snapshot holds no tickets.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// The point in time effective states are derived against.
    pub fn as_of(&self) -> DateTime<Utc> {
        self.as_of
    }
}

/// In-memory model of all boarding tickets, backed by a [`ConfigStore`].
///
/// The registry holds no cached document state between operations; each
/// operation reconciles against the file's actual contents before acting.
#[derive(Debug)]
pub struct FlagRegistry {
    store: ConfigStore,
    config: RegistryConfig,
}

impl FlagRegistry {
    /// Creates a registry over the configured boarding config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured path is invalid.
    pub fn new(config: RegistryConfig) -> Result<Self> {
        let store = ConfigStore::new(config.file.clone())?;
        Ok(Self { store, config })
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Creates an empty boarding config file.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyInitialized` if a file already exists at the path.
    pub fn setup(&self) -> Result<()> {
        self.store.initialize()?;
        Ok(())
    }

    /// Creates a new boarding ticket.
    ///
    /// Defaults per lifecycle policy: enabled unless overridden, expiration
    /// 30 days from creation unless supplied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file does not exist or is malformed
    /// - A ticket with the name already exists (`DuplicateTicket`)
    /// - The name or expiration fails validation
    pub fn create(&self, name: &str, options: CreateOptions) -> Result<BoardingTicket> {
        crate::models::validate_name(name)?;

        self.store.with_lock(|| {
            let mut document = self.store.load()?;
            if document.tickets.contains(name) {
                return Err(Error::DuplicateTicket(name.to_string()));
            }

            let now = Utc::now();
            let expiration = match &options.expiration {
                Some(raw) => policy::parse_expiration(raw, now)?,
                None => policy::default_expiration(now),
            };

            let ticket = BoardingTicket {
                name: name.to_string(),
                enabled: options.enabled,
                expiration: Some(expiration),
                description: options.description,
                tracking_ticket: options.tracking_ticket,
                target_version: options.target_version,
                state: stored_state(options.enabled),
                created_at: now,
                updated_at: now,
            };
            ticket.validate()?;

            document.tickets.insert(ticket.clone())?;
            self.store.save(&document)?;
            Ok(ticket)
        })
    }

    /// Updates a boarding ticket, changing only the supplied fields.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file does not exist or is malformed
    /// - The ticket does not exist (`TicketNotFound`)
    /// - A supplied expiration fails validation (the document is left
    ///   untouched)
    pub fn update(&self, name: &str, options: UpdateOptions) -> Result<BoardingTicket> {
        self.store.with_lock(|| {
            let mut document = self.store.load()?;
            let now = Utc::now();

            // Parse before mutating so a bad value never reaches disk.
            let expiration = match &options.expiration {
                Some(raw) => Some(policy::parse_expiration(raw, now)?),
                None => None,
            };

            let ticket = document
                .tickets
                .get_mut(name)
                .ok_or_else(|| Error::TicketNotFound(name.to_string()))?;

            if let Some(enabled) = options.enabled {
                ticket.enabled = enabled;
                // Boarded is terminal; the stored state otherwise mirrors
                // the flag.
                if !ticket.is_boarded() {
                    ticket.state = stored_state(enabled);
                }
            }
            if let Some(expiration) = expiration {
                ticket.expiration = Some(expiration);
            }
            if let Some(description) = options.description {
                ticket.description = Some(description);
            }
            if let Some(tracking_ticket) = options.tracking_ticket {
                ticket.tracking_ticket = Some(tracking_ticket);
            }
            if let Some(target_version) = options.target_version {
                ticket.target_version = Some(target_version);
            }
            ticket.updated_at = now;
            ticket.validate()?;

            let updated = ticket.clone();
            self.store.save(&document)?;
            Ok(updated)
        })
    }

    /// Returns a read-only snapshot of a ticket plus derived expiry
    /// reporting.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file or the ticket does not exist.
    pub fn show(&self, name: &str) -> Result<TicketView> {
        let document = self.store.load()?;
        let ticket = document
            .tickets
            .get(name)
            .ok_or_else(|| Error::TicketNotFound(name.to_string()))?;
        Ok(TicketView::at(ticket.clone(), Utc::now()))
    }

    /// Transitions a ticket to `Boarded`.
    ///
    /// Idempotent: boarding an already-boarded ticket succeeds without
    /// mutating anything (including `updated_at`). Otherwise the
    /// transition happens regardless of the ticket's enabled or expired
    /// state, unless the registry was configured with
    /// `require_disabled_before_board`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file or the ticket does not exist,
    /// or if the boarding gate rejects a still-enabled ticket.
    pub fn board(&self, name: &str) -> Result<BoardOutcome> {
        self.store.with_lock(|| {
            let mut document = self.store.load()?;
            let ticket = document
                .tickets
                .get_mut(name)
                .ok_or_else(|| Error::TicketNotFound(name.to_string()))?;

            if ticket.is_boarded() {
                return Ok(BoardOutcome {
                    ticket: ticket.clone(),
                    newly_boarded: false,
                });
            }

            policy::check_boardable(ticket, self.config.require_disabled_before_board)?;

            ticket.state = TicketState::Boarded;
            ticket.updated_at = Utc::now();

            let boarded = ticket.clone();
            self.store.save(&document)?;
            Ok(BoardOutcome {
                ticket: boarded,
                newly_boarded: true,
            })
        })
    }

    /// Returns a snapshot of all tickets in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file does not exist or is malformed.
    pub fn list(&self) -> Result<TicketList> {
        let document = self.store.load()?;
        Ok(TicketList {
            tickets: document.tickets.iter().cloned().collect(),
            as_of: Utc::now(),
        })
    }

    /// Loads the raw document, for callers that need the whole thing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file does not exist or is malformed.
    pub fn document(&self) -> Result<BoardingConfig> {
        self.store.load()
    }
}

/// Stored state for a non-boarded ticket with the given flag.
fn stored_state(enabled: bool) -> TicketState {
    if enabled {
        TicketState::Active
    } else {
        TicketState::Disabled
    }
}
