use axum::routing::get;
use axum::Router;

use crate::handlers::report;
use crate::state::AppState;

/// Routes mounted at `/reports`.
///
/// ```text
/// GET    /customer/{id}       -> customer_history
/// GET    /unreturned          -> unreturned
/// GET    /most-rented         -> most_rented
/// GET    /staff-earnings      -> staff_earnings
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customer/{id}", get(report::customer_history))
        .route("/unreturned", get(report::unreturned))
        .route("/most-rented", get(report::most_rented))
        .route("/staff-earnings", get(report::staff_earnings))
}
