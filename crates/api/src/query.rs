//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?limit=` for list and ranking endpoints.
///
/// Values are clamped per endpoint via `dvdrental_core::pagination::clamp_limit`.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}
