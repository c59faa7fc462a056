//! Shared application state
//!
//! Estado compartido que se pasa a través del router de Axum. El pool es
//! el único recurso compartido entre peticiones.

use sqlx::SqlitePool;
use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }
}
