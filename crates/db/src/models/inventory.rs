//! Inventory (physical copy) model and DTOs.

use dvdrental_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `inventory` table: one physical copy of a film.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InventoryItem {
    pub id: DbId,
    pub film_id: DbId,
    pub store_id: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a copy to the inventory.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInventoryItem {
    pub film_id: DbId,
    pub store_id: Option<i16>,
}
