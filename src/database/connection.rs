//! Conexión a la base de datos
//!
//! Crea el pool de SQLx una sola vez al arrancar; el pool se comparte con
//! todos los handlers a través de `AppState`.

use sqlx::SqlitePool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Crear el pool y verificar que la base responde
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    info!("🗄️ Conectando a la base de datos {}", config.display_url());

    let pool = config.create_pool().await?;
    test_connection(&pool).await?;

    info!(
        "✅ Base de datos conectada (max_connections={})",
        config.max_connections
    );
    Ok(pool)
}

/// Verificar que la conexión funciona
async fn test_connection(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
