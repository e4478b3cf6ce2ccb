use axum::routing::get;
use axum::Router;

use crate::handlers::film;
use crate::state::AppState;

/// Routes mounted at `/films`.
///
/// ```text
/// GET    /                      -> list
/// GET    /{id}                  -> get_by_id
/// GET    /{id}/availability     -> availability
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(film::list))
        .route("/{id}", get(film::get_by_id))
        .route("/{id}/availability", get(film::availability))
}
