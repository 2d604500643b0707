// Rust guideline compliant 2026-08-23

//! Property-based tests for the lifecycle policy.
//!
//! These tests validate universal properties of effective-state
//! derivation and default expirations across arbitrary stored fields.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use stationmaster_core::policy::{default_expiration, effective_state};
use stationmaster_core::{BoardingTicket, TicketState};

fn base_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap()
}

/// Generates stored (non-derived) ticket states.
fn arb_stored_state() -> impl Strategy<Value = TicketState> {
    prop_oneof![
        Just(TicketState::Active),
        Just(TicketState::Disabled),
        Just(TicketState::Boarded),
    ]
}

fn ticket(
    enabled: bool,
    state: TicketState,
    expiration_offset_hours: Option<i64>,
) -> BoardingTicket {
    let now = base_now();
    BoardingTicket {
        name: "flag".to_string(),
        enabled,
        expiration: expiration_offset_hours.map(|h| now + Duration::hours(h)),
        description: None,
        tracking_ticket: None,
        target_version: None,
        state,
        created_at: now - Duration::days(1),
        updated_at: now - Duration::days(1),
    }
}

proptest! {
    /// Boarded is sticky: no combination of enabled flag or expiration
    /// changes the effective state of a boarded ticket.
    #[test]
    fn prop_boarded_wins_over_everything(
        enabled in any::<bool>(),
        offset in proptest::option::of(-10_000i64..10_000),
    ) {
        let t = ticket(enabled, TicketState::Boarded, offset);
        prop_assert_eq!(effective_state(&t, base_now()), TicketState::Boarded);
    }

    /// A past expiration reports Expired for any non-boarded ticket,
    /// regardless of the stored enabled flag.
    #[test]
    fn prop_past_expiration_is_expired(
        enabled in any::<bool>(),
        hours_ago in 0i64..10_000,
        state in arb_stored_state(),
    ) {
        prop_assume!(state != TicketState::Boarded);
        let t = ticket(enabled, state, Some(-hours_ago));
        prop_assert_eq!(effective_state(&t, base_now()), TicketState::Expired);
        // Derivation never rewrites the stored flag.
        prop_assert_eq!(t.enabled, enabled);
    }

    /// A future expiration leaves the effective state to the enabled flag.
    #[test]
    fn prop_future_expiration_follows_enabled(
        enabled in any::<bool>(),
        hours_ahead in 1i64..10_000,
        state in arb_stored_state(),
    ) {
        prop_assume!(state != TicketState::Boarded);
        let t = ticket(enabled, state, Some(hours_ahead));
        let expected = if enabled { TicketState::Active } else { TicketState::Disabled };
        prop_assert_eq!(effective_state(&t, base_now()), expected);
    }

    /// The default expiration is always exactly 30 days past creation.
    #[test]
    fn prop_default_expiration_is_exact(offset_secs in -1_000_000i64..1_000_000) {
        let now = base_now() + Duration::seconds(offset_secs);
        prop_assert_eq!(default_expiration(now) - now, Duration::days(30));
    }
}
