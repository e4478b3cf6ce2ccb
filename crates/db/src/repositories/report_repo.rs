//! Read-only aggregation queries behind the `/reports` endpoints.

use dvdrental_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::report::{
    CustomerRentalEntry, CustomerRentalReport, CustomerRentalRow, MostRentedFilm,
    MostRentedReport, StaffEarnings, StaffEarningsReport, StaffEarningsRow, UnreturnedRental,
    UnreturnedRentalRow, UnreturnedReport,
};
use crate::repositories::CustomerRepo;

/// Provides the reporting queries. Nothing here writes.
pub struct ReportRepo;

impl ReportRepo {
    /// Every rental a customer has made, newest first.
    ///
    /// Returns `None` if the customer does not exist. Inactive customers
    /// still have a history.
    pub async fn customer_rentals(
        pool: &PgPool,
        customer_id: DbId,
    ) -> Result<Option<CustomerRentalReport>, sqlx::Error> {
        let Some(customer) = CustomerRepo::find_by_id(pool, customer_id).await? else {
            return Ok(None);
        };

        let rows = sqlx::query_as::<_, CustomerRentalRow>(
            "SELECT r.id AS rental_id, f.title AS film_title, \
                    r.rental_date, r.return_date, p.amount \
             FROM rentals r \
             JOIN inventory i ON i.id = r.inventory_id \
             JOIN films f ON f.id = i.film_id \
             LEFT JOIN payments p ON p.rental_id = r.id \
             WHERE r.customer_id = $1 \
             ORDER BY r.rental_date DESC, r.id DESC",
        )
        .bind(customer_id)
        .fetch_all(pool)
        .await?;

        let rentals: Vec<CustomerRentalEntry> =
            rows.into_iter().map(CustomerRentalEntry::from).collect();

        Ok(Some(CustomerRentalReport {
            customer_id: customer.id,
            customer_name: dvdrental_core::report::full_name(
                &customer.first_name,
                &customer.last_name,
            ),
            customer_email: customer.email,
            total_rentals: rentals.len(),
            rentals,
        }))
    }

    /// All active rentals, oldest first, with lateness computed against `now`.
    pub async fn unreturned(pool: &PgPool, now: Timestamp) -> Result<UnreturnedReport, sqlx::Error> {
        let rows = sqlx::query_as::<_, UnreturnedRentalRow>(
            "SELECT r.id AS rental_id, f.title AS film_title, \
                    c.first_name AS customer_first_name, \
                    c.last_name AS customer_last_name, \
                    r.rental_date, f.rental_duration \
             FROM rentals r \
             JOIN customers c ON c.id = r.customer_id \
             JOIN inventory i ON i.id = r.inventory_id \
             JOIN films f ON f.id = i.film_id \
             WHERE r.return_date IS NULL \
             ORDER BY r.rental_date ASC, r.id ASC",
        )
        .fetch_all(pool)
        .await?;

        let rentals: Vec<UnreturnedRental> = rows
            .into_iter()
            .map(|row| UnreturnedRental::from_row(row, now))
            .collect();

        Ok(UnreturnedReport {
            total_unreturned: rentals.len(),
            rentals,
        })
    }

    /// Films ranked by number of rentals, most rented first.
    ///
    /// Ties are broken by film ID. Films never rented are omitted.
    pub async fn most_rented(pool: &PgPool, limit: i64) -> Result<MostRentedReport, sqlx::Error> {
        let films = sqlx::query_as::<_, MostRentedFilm>(
            "SELECT f.id AS film_id, f.title, f.release_year, \
                    COUNT(r.id) AS rental_count \
             FROM films f \
             JOIN inventory i ON i.film_id = f.id \
             JOIN rentals r ON r.inventory_id = i.id \
             GROUP BY f.id \
             ORDER BY rental_count DESC, f.id ASC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(MostRentedReport {
            total_films: films.len(),
            films,
        })
    }

    /// Transaction count and total takings per staff member.
    ///
    /// Staff who have processed no payments are omitted.
    pub async fn staff_earnings(pool: &PgPool) -> Result<StaffEarningsReport, sqlx::Error> {
        let rows = sqlx::query_as::<_, StaffEarningsRow>(
            "SELECT s.id AS staff_id, s.first_name, s.last_name, \
                    COUNT(p.id) AS total_transactions, \
                    COALESCE(SUM(p.amount), 0) AS total_earnings \
             FROM staff s \
             JOIN payments p ON p.staff_id = s.id \
             GROUP BY s.id \
             ORDER BY s.id",
        )
        .fetch_all(pool)
        .await?;

        let staff: Vec<StaffEarnings> = rows.into_iter().map(StaffEarnings::from).collect();

        Ok(StaffEarningsReport {
            total_staff: staff.len(),
            staff,
        })
    }
}
