use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Requests share nothing mutable in-process; all trip and catalog state lives
/// in the database.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tripdesk_db::DbPool,
    /// Server configuration (read by the admin gate).
    pub config: Arc<ServerConfig>,
}
