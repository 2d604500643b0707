// Rust guideline compliant 2026-08-23

//! Lifecycle policy for boarding tickets.
//!
//! Pure, side-effect-free rules consumed by the registry: default
//! expirations, effective-state derivation, expiry reporting, timestamp
//! and duration parsing, and the boarding gate. The state machine:
//!
//! - created tickets start `Active` (or `Disabled` when created disabled)
//! - time passing beyond `expiration` makes the effective state `Expired`
//!   (derived, never stored)
//! - any non-boarded ticket can be boarded; `Boarded` is terminal and
//!   sticky

use crate::models::{BoardingTicket, TicketState};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use std::fmt;

/// Days until expiration when none is supplied at creation.
pub const DEFAULT_EXPIRATION_DAYS: i64 = 30;

/// Default expiration for a ticket created at `now`.
pub fn default_expiration(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::days(DEFAULT_EXPIRATION_DAYS)
}

/// Derives the effective state of a ticket at `now`.
///
/// `Boarded` is sticky and wins over everything else. Otherwise a past
/// expiration reports `Expired` even when the stored `enabled` flag is
/// true (expiration is authoritative for reporting; the stored flag is
/// preserved verbatim for update semantics). Otherwise the state follows
/// `enabled`.
pub fn effective_state(ticket: &BoardingTicket, now: DateTime<Utc>) -> TicketState {
    if ticket.state == TicketState::Boarded {
        return TicketState::Boarded;
    }
    if let Some(expiration) = ticket.expiration {
        if expiration <= now {
            return TicketState::Expired;
        }
    }
    if ticket.enabled {
        TicketState::Active
    } else {
        TicketState::Disabled
    }
}

/// Expiry position of a ticket relative to a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    /// The ticket expires after the given duration.
    ExpiresIn(Duration),
    /// The ticket expired this long ago.
    ExpiredSince(Duration),
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpiresIn(d) => write!(f, "expires in {}", humanize(*d)),
            Self::ExpiredSince(d) => write!(f, "expired {} ago", humanize(*d)),
        }
    }
}

/// Computes how far a ticket is from its expiration at `now`.
///
/// Returns `None` for tickets without an expiration (documents written by
/// hand may omit it).
pub fn expiry_status(ticket: &BoardingTicket, now: DateTime<Utc>) -> Option<ExpiryStatus> {
    let expiration = ticket.expiration?;
    if expiration > now {
        Some(ExpiryStatus::ExpiresIn(expiration - now))
    } else {
        Some(ExpiryStatus::ExpiredSince(now - expiration))
    }
}

/// Checks whether a ticket may be boarded.
///
/// Boarding is a deliberate human decision that overrides lifecycle
/// staleness, so by default any non-boarded ticket is boardable. With
/// `require_disabled` set, a still-enabled ticket is rejected to prevent
/// premature retirement.
///
/// # Errors
///
/// Returns a validation error when `require_disabled` is set and the
/// ticket's stored `enabled` flag is true.
pub fn check_boardable(ticket: &BoardingTicket, require_disabled: bool) -> crate::Result<()> {
    if require_disabled && ticket.enabled {
        return Err(crate::Error::validation(
            "enabled",
            format!(
                "boarding ticket '{}' is still enabled; disable it before boarding",
                ticket.name
            ),
        ));
    }
    Ok(())
}

/// Parses an expiration value relative to `now`.
///
/// Accepts, in order of precedence:
/// - RFC 3339 timestamps (`2026-12-01T09:00:00Z`)
/// - `YYYY-MM-DD HH:MM:SS` (interpreted as UTC)
/// - bare `YYYY-MM-DD` dates (midnight UTC)
/// - relative durations such as `30 days`, `2 weeks`, `12 hours`,
///   `45 minutes`
///
/// # Errors
///
/// Returns a validation error naming the `expiration` field for anything
/// else.
pub fn parse_expiration(input: &str, now: DateTime<Utc>) -> crate::Result<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Ok(ts.with_timezone(&Utc));
    }

    if let Ok(ts) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Ok(ts.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc());
    }

    if let Some(duration) = parse_relative(input) {
        return Ok(now + duration);
    }

    Err(crate::Error::validation(
        "expiration",
        format!(
            "unrecognized timestamp or duration '{}' (expected e.g. '2026-12-01', \
             '2026-12-01T09:00:00Z', or '30 days')",
            input
        ),
    ))
}

/// Parses relative durations of the form `<amount> <unit>`.
fn parse_relative(input: &str) -> Option<Duration> {
    let mut parts = input.split_whitespace();
    let amount: i64 = parts.next()?.parse().ok()?;
    let unit = parts.next()?;
    if parts.next().is_some() || amount <= 0 {
        return None;
    }

    match unit {
        "minute" | "minutes" => Some(Duration::minutes(amount)),
        "hour" | "hours" => Some(Duration::hours(amount)),
        "day" | "days" => Some(Duration::days(amount)),
        "week" | "weeks" => Some(Duration::weeks(amount)),
        _ => None,
    }
}

/// Renders a duration at the coarsest sensible granularity.
fn humanize(d: Duration) -> String {
    let days = d.num_days();
    if days >= 1 {
        return plural(days, "day");
    }
    let hours = d.num_hours();
    if hours >= 1 {
        return plural(hours, "hour");
    }
    let minutes = d.num_minutes();
    if minutes >= 1 {
        return plural(minutes, "minute");
    }
    "less than a minute".to_string()
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}
