//! Response bodies as the server sends them.
//!
//! Money fields arrive as decimal strings (`"4.99"`) and decode into
//! [`Decimal`]; timestamps are RFC 3339.

use dvdrental_core::rental::RentalStatus;
use dvdrental_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    pub status: String,
    pub version: String,
    pub db_healthy: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Film {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub rental_duration: i32,
    pub rental_rate: Decimal,
    pub length_minutes: Option<i32>,
    pub replacement_cost: Decimal,
    pub rating: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FilmAvailability {
    pub film_id: DbId,
    pub total_copies: i64,
    pub rented_copies: i64,
    pub available_copies: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Staff {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub username: String,
    pub is_active: bool,
}

/// Body of `POST /rentals`.
#[derive(Debug, Clone, Serialize)]
pub struct NewRental {
    pub customer_id: DbId,
    pub film_id: DbId,
    pub staff_id: DbId,
    /// Omitted from the request when `None`; the server default applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Rental {
    pub id: DbId,
    pub rental_date: Timestamp,
    pub inventory_id: DbId,
    pub customer_id: DbId,
    pub staff_id: DbId,
    pub return_date: Option<Timestamp>,
}

impl Rental {
    pub fn status(&self) -> RentalStatus {
        RentalStatus::from_return_date(self.return_date)
    }
}

/// One row of `GET /rentals`.
#[derive(Debug, Clone, Deserialize)]
pub struct RentalSummary {
    pub rental_id: DbId,
    pub customer_name: String,
    pub film_title: String,
    pub rental_date: Timestamp,
    pub return_date: Option<Timestamp>,
    pub status: RentalStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Payment {
    pub id: DbId,
    pub customer_id: DbId,
    pub staff_id: DbId,
    pub rental_id: Option<DbId>,
    pub amount: Decimal,
    pub payment_date: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Cancellation {
    pub message: String,
    pub rental_id: DbId,
    pub payment_removed: bool,
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerReport {
    pub customer_id: DbId,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub total_rentals: usize,
    pub rentals: Vec<CustomerReportEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerReportEntry {
    pub rental_id: DbId,
    pub film_title: String,
    pub rental_date: Timestamp,
    pub return_date: Option<Timestamp>,
    pub status: RentalStatus,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnreturnedReport {
    pub total_unreturned: usize,
    pub rentals: Vec<UnreturnedEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnreturnedEntry {
    pub rental_id: DbId,
    pub film_title: String,
    pub customer_name: String,
    pub rental_date: Timestamp,
    pub expected_return_date: Timestamp,
    pub days_rented: i64,
    pub days_late: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MostRentedReport {
    pub total_films: usize,
    pub films: Vec<RankedFilm>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankedFilm {
    pub film_id: DbId,
    pub title: String,
    pub release_year: Option<i32>,
    pub rental_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaffEarningsReport {
    pub total_staff: usize,
    pub staff: Vec<StaffEarnings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaffEarnings {
    pub staff_id: DbId,
    pub staff_name: String,
    pub total_transactions: i64,
    pub total_earnings: Decimal,
}
