use crate::dto::categoria_dto::CategoriaRequest;
use crate::dto::response_dto::ApiResponse;
use crate::models::Categoria;
use crate::repositories::categoria_repository::CategoriaRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::SqlitePool;
use tracing::{debug, info};

pub const CATEGORIA_NO_ENCONTRADA: &str = "Categoria no encontrada";

pub struct CategoriaController {
    repository: CategoriaRepository,
}

impl CategoriaController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: CategoriaRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Categoria>, AppError> {
        let categorias = self.repository.find_all().await?;
        debug!("📋 {} categorias encontradas", categorias.len());
        Ok(categorias)
    }

    pub async fn create(&self, request: CategoriaRequest) -> Result<ApiResponse, AppError> {
        let result = self.repository.create(&request.nombre).await?;
        info!("🆕 Categoria creada: {:?}", result.last_insert_rowid);

        Ok(ApiResponse::created("Categoria creada", result))
    }

    pub async fn update(&self, id: i64, request: CategoriaRequest) -> Result<ApiResponse, AppError> {
        let result = self.repository.update(id, &request.nombre).await?;
        if result.is_noop() {
            return Err(not_found_error(CATEGORIA_NO_ENCONTRADA));
        }

        info!("✏️ Categoria {} actualizada", id);
        Ok(ApiResponse::updated("categoria actualizada", result))
    }

    pub async fn delete(&self, id: i64) -> Result<ApiResponse, AppError> {
        let result = self.repository.delete(id).await?;
        if result.is_noop() {
            return Err(not_found_error(CATEGORIA_NO_ENCONTRADA));
        }

        info!("🗑️ Categoria {} eliminada", id);
        Ok(ApiResponse::deleted("Categoria eliminada", result))
    }
}
