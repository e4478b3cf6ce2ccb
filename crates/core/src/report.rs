//! Derived values for the reporting layer.
//!
//! All functions take `now` explicitly so reports are reproducible in tests.

use chrono::{DateTime, Duration, Utc};

use crate::types::Timestamp;

/// The date a rental is due back, based on the film's rental duration.
///
/// Saturates at the latest representable instant when the duration runs
/// past it.
pub fn expected_return_date(rental_date: Timestamp, rental_duration_days: i32) -> Timestamp {
    rental_date
        .checked_add_signed(Duration::days(i64::from(rental_duration_days)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Whole days elapsed since the rental started. Never negative.
pub fn days_rented(rental_date: Timestamp, now: Timestamp) -> i64 {
    (now - rental_date).num_days().max(0)
}

/// Whole days past the due date: `max(0, now - (rental_date + duration))`.
pub fn days_late(rental_date: Timestamp, rental_duration_days: i32, now: Timestamp) -> i64 {
    let due = expected_return_date(rental_date, rental_duration_days);
    (now - due).num_days().max(0)
}

/// "First Last" display name used by the customer and staff reports.
pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
