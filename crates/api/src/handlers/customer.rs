//! Handlers for the `/customers` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use dvdrental_core::error::CoreError;
use dvdrental_core::pagination::{clamp_limit, DEFAULT_CATALOG_LIMIT, MAX_CATALOG_LIMIT};
use dvdrental_core::types::DbId;
use dvdrental_db::models::customer::Customer;
use dvdrental_db::repositories::CustomerRepo;

use crate::error::{AppError, AppResult};
use crate::query::LimitParams;
use crate::state::AppState;

/// GET /api/v1/customers
pub async fn list_active(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<Vec<Customer>>> {
    let limit = clamp_limit(params.limit, DEFAULT_CATALOG_LIMIT, MAX_CATALOG_LIMIT);
    let customers = CustomerRepo::list_active(&state.pool, limit).await?;
    Ok(Json(customers))
}

/// GET /api/v1/customers/{id}
///
/// Inactive customers are still returned here; only rental creation
/// refuses them.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Customer>> {
    let customer = CustomerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    Ok(Json(customer))
}
