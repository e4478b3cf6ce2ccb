//! Rental lifecycle rules that do not need the database.
//!
//! Covers request validation, rental status derivation and the conflict
//! checks shared by the return and cancellation processors.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Rental length used when the caller does not specify one.
pub const DEFAULT_RENTAL_DAYS: i32 = 3;
/// Longest rental a single request may ask for.
pub const MAX_RENTAL_DAYS: i32 = 30;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Whether a rental is still out or has come back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalStatus {
    Active,
    Returned,
}

impl RentalStatus {
    /// A rental is active exactly when it has no return date.
    pub fn from_return_date(return_date: Option<Timestamp>) -> Self {
        match return_date {
            None => Self::Active,
            Some(_) => Self::Returned,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a referenced id is a positive key.
pub fn validate_id(field: &str, id: DbId) -> Result<(), CoreError> {
    if id <= 0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a positive id, got {id}"
        )));
    }
    Ok(())
}

/// Validate the requested rental length in days.
pub fn validate_rental_days(days: i32) -> Result<(), CoreError> {
    if !(1..=MAX_RENTAL_DAYS).contains(&days) {
        return Err(CoreError::Validation(format!(
            "days must be between 1 and {MAX_RENTAL_DAYS}, got {days}"
        )));
    }
    Ok(())
}

/// Validate every field of a rental request before any database work.
pub fn validate_rental_request(
    customer_id: DbId,
    film_id: DbId,
    staff_id: DbId,
    days: i32,
) -> Result<(), CoreError> {
    validate_id("customer_id", customer_id)?;
    validate_id("film_id", film_id)?;
    validate_id("staff_id", staff_id)?;
    validate_rental_days(days)
}

// ---------------------------------------------------------------------------
// Lifecycle checks
// ---------------------------------------------------------------------------

/// Conflict raised when the allocator finds every copy of a film rented out.
pub fn no_copies_available(film_id: DbId) -> CoreError {
    CoreError::Conflict(format!("No copies of film {film_id} are available"))
}

/// Ensure a rental has not been returned yet.
///
/// Both returning and cancelling require an active rental.
pub fn ensure_active(rental_id: DbId, return_date: Option<Timestamp>) -> Result<(), CoreError> {
    match RentalStatus::from_return_date(return_date) {
        RentalStatus::Active => Ok(()),
        RentalStatus::Returned => Err(CoreError::Conflict(format!(
            "Rental {rental_id} has already been returned"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
