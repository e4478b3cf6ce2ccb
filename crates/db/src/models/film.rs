//! Film entity model, DTOs and the availability read model.

use dvdrental_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `films` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Film {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    /// Days a rental of this film is allowed to last before it is late.
    pub rental_duration: i32,
    pub rental_rate: Decimal,
    pub length_minutes: Option<i32>,
    pub replacement_cost: Decimal,
    pub rating: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new film. Omitted rates and durations take the
/// column defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFilm {
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub rental_duration: Option<i32>,
    pub rental_rate: Option<Decimal>,
    pub length_minutes: Option<i32>,
    pub replacement_cost: Option<Decimal>,
    pub rating: Option<String>,
}

/// Copy counts for a single film.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmAvailability {
    pub film_id: DbId,
    pub total_copies: i64,
    /// Copies currently out on an active rental.
    pub rented_copies: i64,
    pub available_copies: i64,
}
