//! Read models for the reporting endpoints.
//!
//! `*Row` structs are what the SQL returns; the public report structs are
//! what the API serializes. Derived fields (status, names, lateness) are
//! computed with the pure helpers in `dvdrental_core`.

use dvdrental_core::rental::RentalStatus;
use dvdrental_core::report::{days_late, days_rented, expected_return_date, full_name};
use dvdrental_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Customer rental history
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow)]
pub struct CustomerRentalRow {
    pub rental_id: DbId,
    pub film_title: String,
    pub rental_date: Timestamp,
    pub return_date: Option<Timestamp>,
    pub amount: Option<Decimal>,
}

/// A single rental in a customer's history.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerRentalEntry {
    pub rental_id: DbId,
    pub film_title: String,
    pub rental_date: Timestamp,
    pub return_date: Option<Timestamp>,
    pub status: RentalStatus,
    /// Payment amount, zero when the rental has no payment.
    pub amount: Decimal,
}

impl From<CustomerRentalRow> for CustomerRentalEntry {
    fn from(row: CustomerRentalRow) -> Self {
        Self {
            rental_id: row.rental_id,
            film_title: row.film_title,
            rental_date: row.rental_date,
            return_date: row.return_date,
            status: RentalStatus::from_return_date(row.return_date),
            amount: row.amount.unwrap_or(Decimal::ZERO),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerRentalReport {
    pub customer_id: DbId,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub total_rentals: usize,
    pub rentals: Vec<CustomerRentalEntry>,
}

// ---------------------------------------------------------------------------
// Unreturned rentals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow)]
pub struct UnreturnedRentalRow {
    pub rental_id: DbId,
    pub film_title: String,
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub rental_date: Timestamp,
    pub rental_duration: i32,
}

/// An active rental with its lateness computed against `now`.
#[derive(Debug, Clone, Serialize)]
pub struct UnreturnedRental {
    pub rental_id: DbId,
    pub film_title: String,
    pub customer_name: String,
    pub rental_date: Timestamp,
    pub expected_return_date: Timestamp,
    pub days_rented: i64,
    pub days_late: i64,
}

impl UnreturnedRental {
    pub fn from_row(row: UnreturnedRentalRow, now: Timestamp) -> Self {
        Self {
            rental_id: row.rental_id,
            customer_name: full_name(&row.customer_first_name, &row.customer_last_name),
            film_title: row.film_title,
            expected_return_date: expected_return_date(row.rental_date, row.rental_duration),
            days_rented: days_rented(row.rental_date, now),
            days_late: days_late(row.rental_date, row.rental_duration, now),
            rental_date: row.rental_date,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UnreturnedReport {
    pub total_unreturned: usize,
    pub rentals: Vec<UnreturnedRental>,
}

// ---------------------------------------------------------------------------
// Most-rented films
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MostRentedFilm {
    pub film_id: DbId,
    pub title: String,
    pub release_year: Option<i32>,
    pub rental_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MostRentedReport {
    pub total_films: usize,
    pub films: Vec<MostRentedFilm>,
}

// ---------------------------------------------------------------------------
// Staff earnings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow)]
pub struct StaffEarningsRow {
    pub staff_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub total_transactions: i64,
    pub total_earnings: Decimal,
}

/// Payments processed by one staff member.
#[derive(Debug, Clone, Serialize)]
pub struct StaffEarnings {
    pub staff_id: DbId,
    pub staff_name: String,
    pub total_transactions: i64,
    pub total_earnings: Decimal,
}

impl From<StaffEarningsRow> for StaffEarnings {
    fn from(row: StaffEarningsRow) -> Self {
        Self {
            staff_id: row.staff_id,
            staff_name: full_name(&row.first_name, &row.last_name),
            total_transactions: row.total_transactions,
            total_earnings: row.total_earnings,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StaffEarningsReport {
    pub total_staff: usize,
    pub staff: Vec<StaffEarnings>,
}
