use axum::routing::get;
use axum::Router;

use crate::handlers::staff;
use crate::state::AppState;

/// Routes mounted at `/staff`.
///
/// ```text
/// GET    /          -> list_active
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(staff::list_active))
}
