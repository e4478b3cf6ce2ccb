use axum::extract::State;
use axum::Json;
use dvdrental_db::models::staff::Staff;
use dvdrental_db::repositories::StaffRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/staff
pub async fn list_active(State(state): State<AppState>) -> AppResult<Json<Vec<Staff>>> {
    let staff = StaffRepo::list_active(&state.pool).await?;
    Ok(Json(staff))
}
