//! Shared application state passed to route handlers.

use sqlx::PgPool;

use crate::config::AppConfig;

/// State shared by all handlers. Cloning is cheap: the pool is
/// reference-counted internally.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Runtime configuration; the listener address is derived from it
    /// after state construction.
    pub config: AppConfig,
    /// Postgres pool, present only when `DATABASE_URL` was configured.
    /// Request handlers never write through it; the readiness probe is
    /// its only consumer after the startup ping.
    pub db: Option<PgPool>,
}

impl AppState {
    /// State with default configuration and no database.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default(), None)
    }

    /// State from explicit configuration and an optional pool.
    pub fn with_config(config: AppConfig, db: Option<PgPool>) -> Self {
        Self { config, db }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
