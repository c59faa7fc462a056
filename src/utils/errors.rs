//! Sistema de manejo de errores
//!
//! Este módulo define los errores que pueden salir de un handler y su
//! conversión a la respuesta HTTP `{ "mensaje": ... }`.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use thiserror::Error;
use tracing::{error, warn};

use crate::dto::response_dto::ErrorResponse;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    /// Fallo al ejecutar una sentencia en la base de datos
    #[error("{message}: {source}")]
    Database {
        message: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Mensaje que ve el cliente; nunca incluye detalles de SQL
    pub fn public_message(&self) -> String {
        match self {
            AppError::Database { message, .. } => message.clone(),
            AppError::Validation(errors) => {
                let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
                fields.sort_unstable();
                format!("Datos inválidos: {}", fields.join(", "))
            }
            AppError::BadRequest(msg) | AppError::NotFound(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database { message, source } => {
                error!("❌ {}: {}", message, source);
            }
            AppError::Validation(errors) => {
                warn!("⚠️ Validation error: {}", errors);
            }
            AppError::BadRequest(msg) => {
                warn!("⚠️ Bad request: {}", msg);
            }
            AppError::NotFound(msg) => {
                warn!("🔍 {}", msg);
            }
        }

        let body = ErrorResponse::new(self.public_message());
        (self.status_code(), Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Adjunta un mensaje legible a un error de SQLx
///
/// ```ignore
/// query.execute(&pool).await.map_err(database_error("Error al crear la tarjeta"))?;
/// ```
pub fn database_error(message: &str) -> impl FnOnce(sqlx::Error) -> AppError + '_ {
    move |source| AppError::Database {
        message: message.to_string(),
        source,
    }
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(message: &str) -> AppError {
    AppError::NotFound(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1))]
        nombre: String,
        #[validate(length(min = 1))]
        alias: String,
    }

    #[test]
    fn test_status_codes_are_distinct() {
        let db = AppError::Database {
            message: "Error al crear la tarjeta".to_string(),
            source: sqlx::Error::RowNotFound,
        };
        assert_eq!(db.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(not_found_error("Tarjeta no encontrada").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::BadRequest("x".into()).status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_message_hides_sql_detail() {
        let err = database_error("Error al eliminar la categoria")(sqlx::Error::PoolTimedOut);
        assert_eq!(err.public_message(), "Error al eliminar la categoria");
        assert!(err.to_string().contains("pool timed out"));
    }

    #[test]
    fn test_validation_message_lists_fields_in_order() {
        let errors = Sample {
            nombre: String::new(),
            alias: String::new(),
        }
        .validate()
        .unwrap_err();

        let err = AppError::from(errors);
        assert_eq!(err.public_message(), "Datos inválidos: alias, nombre");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
