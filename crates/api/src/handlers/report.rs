//! Handlers for `/reports`. All read-only.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use dvdrental_core::error::CoreError;
use dvdrental_core::pagination::{clamp_limit, DEFAULT_RANKING_LIMIT, MAX_RANKING_LIMIT};
use dvdrental_core::types::DbId;
use dvdrental_db::models::report::{
    CustomerRentalReport, MostRentedReport, StaffEarningsReport, UnreturnedReport,
};
use dvdrental_db::repositories::ReportRepo;

use crate::error::{AppError, AppResult};
use crate::query::LimitParams;
use crate::state::AppState;

/// GET /api/v1/reports/customer/{id}
pub async fn customer_history(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CustomerRentalReport>> {
    let report = ReportRepo::customer_rentals(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    Ok(Json(report))
}

/// GET /api/v1/reports/unreturned
///
/// Lateness is measured against the server clock at request time.
pub async fn unreturned(State(state): State<AppState>) -> AppResult<Json<UnreturnedReport>> {
    let report = ReportRepo::unreturned(&state.pool, Utc::now()).await?;
    Ok(Json(report))
}

/// GET /api/v1/reports/most-rented
pub async fn most_rented(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<MostRentedReport>> {
    let limit = clamp_limit(params.limit, DEFAULT_RANKING_LIMIT, MAX_RANKING_LIMIT);
    let report = ReportRepo::most_rented(&state.pool, limit).await?;
    Ok(Json(report))
}

/// GET /api/v1/reports/staff-earnings
pub async fn staff_earnings(
    State(state): State<AppState>,
) -> AppResult<Json<StaffEarningsReport>> {
    let report = ReportRepo::staff_earnings(&state.pool).await?;
    Ok(Json(report))
}
