//! Rental entity model, DTOs and listing read models.

use dvdrental_core::rental::{RentalStatus, DEFAULT_RENTAL_DAYS};
use dvdrental_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `rentals` table.
///
/// `return_date` is `None` while the rental is active.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rental {
    pub id: DbId,
    pub rental_date: Timestamp,
    pub inventory_id: DbId,
    pub customer_id: DbId,
    pub staff_id: DbId,
    pub return_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

fn default_rental_days() -> i32 {
    DEFAULT_RENTAL_DAYS
}

/// Request to rent a film. The allocator chooses the copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRental {
    pub customer_id: DbId,
    pub film_id: DbId,
    pub staff_id: DbId,
    #[serde(default = "default_rental_days")]
    pub days: i32,
}

/// Result of cancelling a rental.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelledRental {
    pub rental_id: DbId,
    /// Whether a payment row was deleted together with the rental.
    pub payment_removed: bool,
}

/// Joined row backing the recent-rentals listing.
#[derive(Debug, Clone, FromRow)]
pub struct RentalListRow {
    pub rental_id: DbId,
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub film_title: String,
    pub rental_date: Timestamp,
    pub return_date: Option<Timestamp>,
}

/// One entry of the recent-rentals listing.
#[derive(Debug, Clone, Serialize)]
pub struct RentalListItem {
    pub rental_id: DbId,
    pub customer_name: String,
    pub film_title: String,
    pub rental_date: Timestamp,
    pub return_date: Option<Timestamp>,
    pub status: RentalStatus,
}

impl From<RentalListRow> for RentalListItem {
    fn from(row: RentalListRow) -> Self {
        Self {
            rental_id: row.rental_id,
            customer_name: dvdrental_core::report::full_name(
                &row.customer_first_name,
                &row.customer_last_name,
            ),
            film_title: row.film_title,
            rental_date: row.rental_date,
            return_date: row.return_date,
            status: RentalStatus::from_return_date(row.return_date),
        }
    }
}
