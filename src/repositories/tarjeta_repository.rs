use crate::dto::response_dto::ExecutionResult;
use crate::dto::tarjeta_dto::TarjetaRequest;
use crate::models::TarjetaConCategoria;
use crate::utils::errors::{database_error, AppError};
use sqlx::SqlitePool;

pub struct TarjetaRepository {
    pool: SqlitePool,
}

impl TarjetaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<TarjetaConCategoria>, AppError> {
        let tarjetas = sqlx::query_as::<_, TarjetaConCategoria>(
            r#"
            SELECT tarjeta.tarj_id, tarjeta.title, CAST(tarjeta.value AS REAL) AS value,
                   tarjeta.description, tarjeta.images, tarjeta.categoria_id,
                   tarjeta.create_ad, tarjeta.updated_at,
                   categoria.nombre AS categoria_nombre
            FROM tarjeta
            LEFT JOIN categoria ON tarjeta.categoria_id = categoria.id
            ORDER BY tarjeta.tarj_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("Error al listar las tarjetas"))?;

        Ok(tarjetas)
    }

    pub async fn create(&self, request: &TarjetaRequest) -> Result<ExecutionResult, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO tarjeta (title, value, description, images, categoria_id, create_ad)
            VALUES (?, ?, ?, ?, ?, CURRENT_TIMESTAMP)
            "#,
        )
        .bind(&request.title)
        .bind(request.value)
        .bind(&request.description)
        .bind(&request.images)
        .bind(request.categoria_id)
        .execute(&self.pool)
        .await
        .map_err(database_error("Error al crear la tarjeta"))?;

        Ok(ExecutionResult::inserted(&result))
    }

    /// Actualiza en una sola sentencia; cero filas afectadas indica que la
    /// tarjeta no existe.
    pub async fn update(&self, tarj_id: i64, request: &TarjetaRequest) -> Result<ExecutionResult, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE tarjeta
            SET title = ?, value = ?, description = ?, images = ?, categoria_id = ?, updated_at = CURRENT_TIMESTAMP
            WHERE tarj_id = ?
            "#,
        )
        .bind(&request.title)
        .bind(request.value)
        .bind(&request.description)
        .bind(&request.images)
        .bind(request.categoria_id)
        .bind(tarj_id)
        .execute(&self.pool)
        .await
        .map_err(database_error("Error al actualizar la tarjeta"))?;

        Ok(ExecutionResult::modified(&result))
    }

    pub async fn delete(&self, tarj_id: i64) -> Result<ExecutionResult, AppError> {
        let result = sqlx::query("DELETE FROM tarjeta WHERE tarj_id = ?")
            .bind(tarj_id)
            .execute(&self.pool)
            .await
            .map_err(database_error("Error al eliminar la tarjeta"))?;

        Ok(ExecutionResult::modified(&result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;

    fn phone(categoria_id: Option<i64>) -> TarjetaRequest {
        TarjetaRequest {
            title: "Phone".to_string(),
            value: 100.0,
            description: Some("d".to_string()),
            images: Some("[]".to_string()),
            categoria_id,
        }
    }

    #[tokio::test]
    async fn test_create_stamps_creation_time() {
        let repo = TarjetaRepository::new(test_pool().await);

        let result = repo.create(&phone(None)).await.unwrap();
        assert_eq!(result.rows_affected, 1);
        assert_eq!(result.last_insert_rowid, Some(1));

        let rows = repo.find_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].tarjeta.title.as_deref(), Some("Phone"));
        assert!(rows[0].tarjeta.updated_at.is_none());
        assert!(rows[0].categoria_nombre.is_none());
    }

    #[tokio::test]
    async fn test_find_all_joins_category_name() {
        let pool = test_pool().await;
        sqlx::query("INSERT INTO categoria (nombre) VALUES ('Electronics')")
            .execute(&pool)
            .await
            .unwrap();
        let repo = TarjetaRepository::new(pool);

        repo.create(&phone(Some(1))).await.unwrap();
        repo.create(&phone(Some(99))).await.unwrap();

        let rows = repo.find_all().await.unwrap();
        assert_eq!(rows[0].categoria_nombre.as_deref(), Some("Electronics"));
        assert_eq!(rows[1].tarjeta.categoria_id, Some(99));
        assert!(rows[1].categoria_nombre.is_none());
    }

    #[tokio::test]
    async fn test_update_only_touches_target_row() {
        let repo = TarjetaRepository::new(test_pool().await);
        repo.create(&phone(None)).await.unwrap();
        repo.create(&phone(None)).await.unwrap();

        let mut changed = phone(None);
        changed.title = "Phone X".to_string();
        let result = repo.update(2, &changed).await.unwrap();
        assert_eq!(result.rows_affected, 1);

        let rows = repo.find_all().await.unwrap();
        assert_eq!(rows[0].tarjeta.title.as_deref(), Some("Phone"));
        assert!(rows[0].tarjeta.updated_at.is_none());
        assert_eq!(rows[1].tarjeta.title.as_deref(), Some("Phone X"));
        assert!(rows[1].tarjeta.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_row_affect_nothing() {
        let repo = TarjetaRepository::new(test_pool().await);
        repo.create(&phone(None)).await.unwrap();

        assert!(repo.update(42, &phone(None)).await.unwrap().is_noop());
        assert!(repo.delete(42).await.unwrap().is_noop());
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_store_failure_carries_operation_message() {
        let pool = test_pool().await;
        sqlx::query("DROP TABLE tarjeta").execute(&pool).await.unwrap();
        let repo = TarjetaRepository::new(pool);

        let err = repo.create(&phone(None)).await.unwrap_err();
        assert_eq!(err.public_message(), "Error al crear la tarjeta");
    }
}
