//! Repository for the `payments` table.

use dvdrental_core::types::DbId;
use sqlx::{PgConnection, PgExecutor};

use crate::models::payment::{NewPayment, Payment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, customer_id, staff_id, rental_id, amount, payment_date, created_at, updated_at";

/// Provides payment reads and the lifecycle writes.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Insert the payment for a freshly created rental.
    pub async fn insert(
        conn: &mut PgConnection,
        input: &NewPayment,
    ) -> Result<Payment, sqlx::Error> {
        let query = format!(
            "INSERT INTO payments (customer_id, staff_id, rental_id, amount, payment_date) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(input.customer_id)
            .bind(input.staff_id)
            .bind(input.rental_id)
            .bind(input.amount)
            .bind(input.payment_date)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find the payment attached to a rental.
    pub async fn find_by_rental(
        executor: impl PgExecutor<'_>,
        rental_id: DbId,
    ) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments WHERE rental_id = $1");
        sqlx::query_as::<_, Payment>(&query)
            .bind(rental_id)
            .fetch_optional(executor)
            .await
    }

    /// Delete the payment attached to a rental. Returns `true` if one existed.
    pub async fn delete_by_rental(
        conn: &mut PgConnection,
        rental_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM payments WHERE rental_id = $1")
            .bind(rental_id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
