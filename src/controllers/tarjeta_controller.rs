use crate::dto::response_dto::ApiResponse;
use crate::dto::tarjeta_dto::TarjetaRequest;
use crate::models::TarjetaConCategoria;
use crate::repositories::tarjeta_repository::TarjetaRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::SqlitePool;
use tracing::{debug, info};

pub const TARJETA_NO_ENCONTRADA: &str = "Tarjeta no encontrada";

pub struct TarjetaController {
    repository: TarjetaRepository,
}

impl TarjetaController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: TarjetaRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<TarjetaConCategoria>, AppError> {
        let tarjetas = self.repository.find_all().await?;
        debug!("📋 {} tarjetas encontradas", tarjetas.len());
        Ok(tarjetas)
    }

    pub async fn create(&self, request: TarjetaRequest) -> Result<ApiResponse, AppError> {
        let result = self.repository.create(&request).await?;
        info!("🆕 Tarjeta creada: {:?}", result.last_insert_rowid);

        Ok(ApiResponse::created("Tarjeta creada", result))
    }

    pub async fn update(&self, tarj_id: i64, request: TarjetaRequest) -> Result<ApiResponse, AppError> {
        let result = self.repository.update(tarj_id, &request).await?;
        if result.is_noop() {
            return Err(not_found_error(TARJETA_NO_ENCONTRADA));
        }

        info!("✏️ Tarjeta {} actualizada", tarj_id);
        Ok(ApiResponse::updated("Tarjeta actualizada", result))
    }

    pub async fn delete(&self, tarj_id: i64) -> Result<ApiResponse, AppError> {
        let result = self.repository.delete(tarj_id).await?;
        if result.is_noop() {
            return Err(not_found_error(TARJETA_NO_ENCONTRADA));
        }

        info!("🗑️ Tarjeta {} eliminada", tarj_id);
        Ok(ApiResponse::deleted("Tarjeta eliminada", result))
    }
}
