//! Payment entity model.

use dvdrental_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `payments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    pub id: DbId,
    pub customer_id: DbId,
    pub staff_id: DbId,
    /// `None` only for payments not tied to a rental.
    pub rental_id: Option<DbId>,
    pub amount: Decimal,
    pub payment_date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Values for the payment written alongside a new rental.
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub customer_id: DbId,
    pub staff_id: DbId,
    pub rental_id: DbId,
    pub amount: Decimal,
    pub payment_date: Timestamp,
}
