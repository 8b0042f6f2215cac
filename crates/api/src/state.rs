use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. The sole source of truth -- handlers keep no
    /// state of their own between requests.
    pub pool: roster_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
