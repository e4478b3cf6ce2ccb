//! Handlers for the `/rentals` resource.
//!
//! Create, return and cancel delegate to [`RentalLifecycle`], which owns the
//! transaction. The read handlers query the repositories directly.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use dvdrental_core::error::CoreError;
use dvdrental_core::pagination::{clamp_limit, DEFAULT_RENTAL_LIMIT, MAX_RENTAL_LIMIT};
use dvdrental_core::types::DbId;
use dvdrental_db::lifecycle::RentalLifecycle;
use dvdrental_db::models::payment::Payment;
use dvdrental_db::models::rental::{CreateRental, Rental, RentalListItem};
use dvdrental_db::repositories::{PaymentRepo, RentalRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::LimitParams;
use crate::state::AppState;

/// Body returned by `DELETE /rentals/{id}`.
#[derive(Debug, Serialize)]
pub struct CancelResponse {
    pub message: &'static str,
    pub rental_id: DbId,
    pub payment_removed: bool,
}

/// GET /api/v1/rentals
pub async fn list_recent(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<Vec<RentalListItem>>> {
    let limit = clamp_limit(params.limit, DEFAULT_RENTAL_LIMIT, MAX_RENTAL_LIMIT);
    let rentals = RentalRepo::list_recent(&state.pool, limit).await?;
    Ok(Json(rentals))
}

/// POST /api/v1/rentals
///
/// Picks a free copy of the film, records the rental and charges
/// `film.rental_rate`. Responds 409 when every copy is out.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateRental>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Rental>)> {
    let Json(input) = payload?;
    let rental = RentalLifecycle::allocate(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(rental)))
}

/// GET /api/v1/rentals/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Rental>> {
    let rental = RentalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Rental",
            id,
        }))?;
    Ok(Json(rental))
}

/// GET /api/v1/rentals/{id}/payment
pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Payment>> {
    let payment = PaymentRepo::find_by_rental(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Payment for rental",
                id,
            })
        })?;
    Ok(Json(payment))
}

/// PUT /api/v1/rentals/{id}/return
pub async fn return_rental(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Rental>> {
    let rental = RentalLifecycle::return_rental(&state.pool, id).await?;
    Ok(Json(rental))
}

/// DELETE /api/v1/rentals/{id}
///
/// Only active rentals can be cancelled; the payment goes with them.
pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CancelResponse>> {
    let cancelled = RentalLifecycle::cancel(&state.pool, id).await?;
    Ok(Json(CancelResponse {
        message: "Rental cancelled",
        rental_id: cancelled.rental_id,
        payment_removed: cancelled.payment_removed,
    }))
}
