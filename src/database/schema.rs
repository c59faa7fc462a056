//! Creación de las tablas si no existen
//!
//! No es un sistema de migraciones: sólo deja una base vacía lista para
//! usar (tests y entornos de desarrollo con `DB_INIT_SCHEMA=true`).

use sqlx::SqlitePool;

const CREATE_CATEGORIA: &str = r#"
    CREATE TABLE IF NOT EXISTS categoria (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nombre TEXT NOT NULL
    )
"#;

// categoria_id sin REFERENCES: la integridad no se impone
const CREATE_TARJETA: &str = r#"
    CREATE TABLE IF NOT EXISTS tarjeta (
        tarj_id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        value REAL NOT NULL,
        description TEXT,
        images TEXT,
        categoria_id INTEGER,
        create_ad TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at TEXT
    )
"#;

pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_CATEGORIA).execute(pool).await?;
    sqlx::query(CREATE_TARJETA).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let pool = DatabaseConfig::in_memory().create_pool().await.unwrap();
        ensure_schema(&pool).await.unwrap();
        ensure_schema(&pool).await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('tarjeta', 'categoria') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        assert_eq!(tables, vec![("categoria".to_string(),), ("tarjeta".to_string(),)]);
    }
}
