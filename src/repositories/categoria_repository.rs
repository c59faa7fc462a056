use crate::dto::response_dto::ExecutionResult;
use crate::models::Categoria;
use crate::utils::errors::{database_error, AppError};
use sqlx::SqlitePool;

pub struct CategoriaRepository {
    pool: SqlitePool,
}

impl CategoriaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Categoria>, AppError> {
        let categorias = sqlx::query_as::<_, Categoria>("SELECT * FROM categoria ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(database_error("Error al listar las categorias"))?;

        Ok(categorias)
    }

    pub async fn create(&self, nombre: &str) -> Result<ExecutionResult, AppError> {
        let result = sqlx::query("INSERT INTO categoria (nombre) VALUES (?)")
            .bind(nombre)
            .execute(&self.pool)
            .await
            .map_err(database_error("Error al crear la categoria"))?;

        Ok(ExecutionResult::inserted(&result))
    }

    pub async fn update(&self, id: i64, nombre: &str) -> Result<ExecutionResult, AppError> {
        let result = sqlx::query("UPDATE categoria SET nombre = ? WHERE id = ?")
            .bind(nombre)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error("Error al actualizar la categoria"))?;

        Ok(ExecutionResult::modified(&result))
    }

    // No comprueba si hay tarjetas que la referencian
    pub async fn delete(&self, id: i64) -> Result<ExecutionResult, AppError> {
        let result = sqlx::query("DELETE FROM categoria WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error("Error al eliminar la Categoria"))?;

        Ok(ExecutionResult::modified(&result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;

    #[tokio::test]
    async fn test_crud_cycle() {
        let repo = CategoriaRepository::new(test_pool().await);

        let created = repo.create("Electronics").await.unwrap();
        let id = created.last_insert_rowid.unwrap();
        repo.create("Hogar").await.unwrap();

        assert_eq!(repo.update(id, "Electrónica").await.unwrap().rows_affected, 1);

        let categorias = repo.find_all().await.unwrap();
        assert_eq!(
            categorias,
            vec![
                Categoria { id, nombre: Some("Electrónica".to_string()) },
                Categoria { id: id + 1, nombre: Some("Hogar".to_string()) },
            ]
        );

        assert_eq!(repo.delete(id).await.unwrap().rows_affected, 1);
        assert!(repo.delete(id).await.unwrap().is_noop());
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_referenced_category_is_not_guarded() {
        let pool = test_pool().await;
        let repo = CategoriaRepository::new(pool.clone());
        let id = repo.create("Electronics").await.unwrap().last_insert_rowid.unwrap();

        sqlx::query("INSERT INTO tarjeta (title, value, categoria_id) VALUES ('Phone', 1, ?)")
            .bind(id)
            .execute(&pool)
            .await
            .unwrap();

        assert_eq!(repo.delete(id).await.unwrap().rows_affected, 1);
    }

    #[tokio::test]
    async fn test_store_failure_carries_operation_message() {
        let pool = test_pool().await;
        sqlx::query("DROP TABLE categoria").execute(&pool).await.unwrap();
        let repo = CategoriaRepository::new(pool);

        let err = repo.delete(1).await.unwrap_err();
        assert_eq!(err.public_message(), "Error al eliminar la Categoria");
    }
}
