//! Repository for the `rentals` table.

use dvdrental_core::types::{DbId, Timestamp};
use sqlx::{PgConnection, PgExecutor, PgPool};

use crate::models::rental::{Rental, RentalListItem, RentalListRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, rental_date, inventory_id, customer_id, staff_id, return_date, created_at, updated_at";

/// Provides queries and lifecycle writes for rentals.
///
/// The write methods take an explicit connection so they can only be used
/// inside the caller's transaction (see [`crate::lifecycle`]).
pub struct RentalRepo;

impl RentalRepo {
    /// Insert an active rental for a specific copy.
    ///
    /// Fails with a unique violation on `uq_rentals_active_inventory` if the
    /// copy already has an active rental.
    pub async fn insert(
        conn: &mut PgConnection,
        inventory_id: DbId,
        customer_id: DbId,
        staff_id: DbId,
        rental_date: Timestamp,
    ) -> Result<Rental, sqlx::Error> {
        let query = format!(
            "INSERT INTO rentals (rental_date, inventory_id, customer_id, staff_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(rental_date)
            .bind(inventory_id)
            .bind(customer_id)
            .bind(staff_id)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a rental by its internal ID.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rentals WHERE id = $1");
        sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a rental and hold a row lock on it until the transaction ends.
    pub async fn lock_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rentals WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Set the return date of an active rental.
    ///
    /// Returns `None` if the rental does not exist or was already returned.
    pub async fn mark_returned(
        conn: &mut PgConnection,
        id: DbId,
        return_date: Timestamp,
    ) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!(
            "UPDATE rentals SET return_date = $2 \
             WHERE id = $1 AND return_date IS NULL \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .bind(return_date)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Permanently delete a rental. Returns `true` if a row was removed.
    ///
    /// The rental's payment must be deleted first.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rentals WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find the active rental holding a copy, if any.
    pub async fn find_active_by_inventory(
        pool: &PgPool,
        inventory_id: DbId,
    ) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rentals WHERE inventory_id = $1 AND return_date IS NULL"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(inventory_id)
            .fetch_optional(pool)
            .await
    }

    /// List the most recent rentals with customer and film names, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<RentalListItem>, sqlx::Error> {
        let rows = sqlx::query_as::<_, RentalListRow>(
            "SELECT r.id AS rental_id, \
                    c.first_name AS customer_first_name, \
                    c.last_name AS customer_last_name, \
                    f.title AS film_title, \
                    r.rental_date, r.return_date \
             FROM rentals r \
             JOIN customers c ON c.id = r.customer_id \
             JOIN inventory i ON i.id = r.inventory_id \
             JOIN films f ON f.id = i.film_id \
             ORDER BY r.rental_date DESC, r.id DESC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(RentalListItem::from).collect())
    }
}
