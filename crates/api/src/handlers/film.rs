//! Handlers for the `/films` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use dvdrental_core::error::CoreError;
use dvdrental_core::pagination::{clamp_limit, DEFAULT_CATALOG_LIMIT, MAX_CATALOG_LIMIT};
use dvdrental_core::types::DbId;
use dvdrental_db::models::film::{Film, FilmAvailability};
use dvdrental_db::repositories::FilmRepo;

use crate::error::{AppError, AppResult};
use crate::query::LimitParams;
use crate::state::AppState;

/// GET /api/v1/films
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<Vec<Film>>> {
    let limit = clamp_limit(params.limit, DEFAULT_CATALOG_LIMIT, MAX_CATALOG_LIMIT);
    let films = FilmRepo::list(&state.pool, limit).await?;
    Ok(Json(films))
}

/// GET /api/v1/films/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Film>> {
    let film = FilmRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Film", id }))?;
    Ok(Json(film))
}

/// GET /api/v1/films/{id}/availability
pub async fn availability(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<FilmAvailability>> {
    let availability = FilmRepo::availability(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Film", id }))?;
    Ok(Json(availability))
}
