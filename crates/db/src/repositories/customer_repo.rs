//! Repository for the `customers` table.

use dvdrental_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::customer::{CreateCustomer, Customer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, email, is_active, created_at, updated_at";

/// Provides CRUD operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers (first_name, last_name, email, is_active) \
             VALUES ($1, $2, $3, COALESCE($4, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a customer by ID regardless of active status.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a customer by ID only if they are allowed to rent.
    pub async fn find_active_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1 AND is_active = true");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List active customers ordered by ID.
    pub async fn list_active(pool: &PgPool, limit: i64) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM customers WHERE is_active = true ORDER BY id LIMIT $1"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Deactivate a customer. Inactive customers cannot rent.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE customers SET is_active = false WHERE id = $1 AND is_active = true")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
