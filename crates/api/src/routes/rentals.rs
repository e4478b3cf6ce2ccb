//! Route definitions for the rental lifecycle.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::rental;
use crate::state::AppState;

/// Routes mounted at `/rentals`.
///
/// ```text
/// GET    /                  -> list_recent
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// DELETE /{id}              -> cancel
/// PUT    /{id}/return       -> return_rental
/// GET    /{id}/payment      -> get_payment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(rental::list_recent).post(rental::create))
        .route("/{id}", get(rental::get_by_id).delete(rental::cancel))
        .route("/{id}/return", put(rental::return_rental))
        .route("/{id}/payment", get(rental::get_payment))
}
