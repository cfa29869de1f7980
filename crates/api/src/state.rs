use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Constructed once at startup and cheaply cloneable; handlers receive it by
/// explicit injection rather than through any process-global.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: canteen_db::DbPool,
    /// Server configuration (CORS, timeouts, JWT secret).
    pub config: Arc<ServerConfig>,
}
