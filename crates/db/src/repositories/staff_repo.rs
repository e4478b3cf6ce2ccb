//! Repository for the `staff` table.

use dvdrental_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::staff::{CreateStaff, Staff};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, first_name, last_name, email, username, is_active, created_at, updated_at";

/// Provides CRUD operations for staff members.
pub struct StaffRepo;

impl StaffRepo {
    /// Insert a new staff member, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStaff) -> Result<Staff, sqlx::Error> {
        let query = format!(
            "INSERT INTO staff (first_name, last_name, email, username, is_active) \
             VALUES ($1, $2, $3, $4, COALESCE($5, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.username)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a staff member by ID.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff WHERE id = $1");
        sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List active staff ordered by ID.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Staff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff WHERE is_active = true ORDER BY id");
        sqlx::query_as::<_, Staff>(&query).fetch_all(pool).await
    }
}
