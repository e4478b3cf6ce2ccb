use std::sync::Arc;

use crate::config::ServerConfig;

/// State handed to every handler through `State<AppState>`.
///
/// Cloned per request; the pool and the config are both shared handles.
#[derive(Clone)]
pub struct AppState {
    pub pool: dvdrental_db::DbPool,
    pub config: Arc<ServerConfig>,
}
