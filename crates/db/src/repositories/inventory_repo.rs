//! Repository for the `inventory` table.

use dvdrental_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::inventory::{CreateInventoryItem, InventoryItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, film_id, store_id, created_at, updated_at";

/// Provides queries over physical film copies.
pub struct InventoryRepo;

impl InventoryRepo {
    /// Add a copy of a film, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInventoryItem,
    ) -> Result<InventoryItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO inventory (film_id, store_id) \
             VALUES ($1, COALESCE($2, 1)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InventoryItem>(&query)
            .bind(input.film_id)
            .bind(input.store_id)
            .fetch_one(pool)
            .await
    }

    /// List every copy of a film ordered by ID.
    pub async fn list_by_film(
        pool: &PgPool,
        film_id: DbId,
    ) -> Result<Vec<InventoryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventory WHERE film_id = $1 ORDER BY id");
        sqlx::query_as::<_, InventoryItem>(&query)
            .bind(film_id)
            .fetch_all(pool)
            .await
    }

    /// Lock the lowest-id copy of a film that has no active rental.
    ///
    /// Must run inside a transaction. Uses `FOR UPDATE SKIP LOCKED` so a
    /// copy being allocated by a concurrent transaction is passed over
    /// rather than waited on.
    pub async fn lock_available_copy(
        conn: &mut PgConnection,
        film_id: DbId,
    ) -> Result<Option<InventoryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inventory i \
             WHERE i.film_id = $1 \
               AND NOT EXISTS ( \
                   SELECT 1 FROM rentals r \
                   WHERE r.inventory_id = i.id AND r.return_date IS NULL \
               ) \
             ORDER BY i.id \
             LIMIT 1 \
             FOR UPDATE OF i SKIP LOCKED"
        );
        sqlx::query_as::<_, InventoryItem>(&query)
            .bind(film_id)
            .fetch_optional(&mut *conn)
            .await
    }
}
