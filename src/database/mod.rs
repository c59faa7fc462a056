//! Módulo de base de datos
//!
//! Maneja la conexión y el esquema de SQLite

pub mod connection;
pub mod schema;

pub use connection::connect;
pub use schema::ensure_schema;

/// Pool en memoria con el esquema creado, para tests
#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    let pool = crate::config::DatabaseConfig::in_memory()
        .create_pool()
        .await
        .expect("in-memory pool");
    ensure_schema(&pool).await.expect("schema");
    pool
}
