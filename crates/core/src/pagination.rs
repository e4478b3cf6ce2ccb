//! Limit clamping for list and report endpoints.

/// Default page size for customer and film listings.
pub const DEFAULT_CATALOG_LIMIT: i64 = 50;
/// Upper bound for customer and film listings.
pub const MAX_CATALOG_LIMIT: i64 = 500;

/// Default number of rows for the recent-rentals listing.
pub const DEFAULT_RENTAL_LIMIT: i64 = 100;
/// Upper bound for the recent-rentals listing.
pub const MAX_RENTAL_LIMIT: i64 = 1000;

/// Default number of films in the most-rented report.
pub const DEFAULT_RANKING_LIMIT: i64 = 10;
/// Upper bound for the most-rented report.
pub const MAX_RANKING_LIMIT: i64 = 100;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
