//! Formas de respuesta de las operaciones de escritura
//!
//! Las lecturas devuelven el arreglo de filas sin envoltorio; las escrituras
//! devuelven `{ "mensaje": ..., <etiqueta>: <resultado> }` y los fallos
//! `{ "mensaje": ... }`.

use serde::Serialize;
use sqlx::sqlite::SqliteQueryResult;

/// Resultado crudo de ejecutar una sentencia de escritura
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    pub rows_affected: u64,
    pub last_insert_rowid: Option<i64>,
}

impl ExecutionResult {
    /// Resultado de un INSERT, con la clave de la fila creada
    pub fn inserted(result: &SqliteQueryResult) -> Self {
        Self {
            rows_affected: result.rows_affected(),
            last_insert_rowid: Some(result.last_insert_rowid()),
        }
    }

    /// Resultado de un UPDATE o DELETE
    pub fn modified(result: &SqliteQueryResult) -> Self {
        Self {
            rows_affected: result.rows_affected(),
            last_insert_rowid: None,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.rows_affected == 0
    }
}

/// Etiqueta bajo la que viaja el resultado en el envoltorio
#[derive(Debug, Clone, Serialize)]
pub enum EnvelopePayload {
    #[serde(rename = "usuario")]
    Created(ExecutionResult),
    #[serde(rename = "tarjeta")]
    Updated(ExecutionResult),
    #[serde(rename = "resultado")]
    Deleted(ExecutionResult),
}

// Response de éxito para escrituras
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub mensaje: String,
    #[serde(flatten)]
    pub payload: EnvelopePayload,
}

impl ApiResponse {
    pub fn created(message: &str, result: ExecutionResult) -> Self {
        Self {
            mensaje: message.to_string(),
            payload: EnvelopePayload::Created(result),
        }
    }

    pub fn updated(message: &str, result: ExecutionResult) -> Self {
        Self {
            mensaje: message.to_string(),
            payload: EnvelopePayload::Updated(result),
        }
    }

    pub fn deleted(message: &str, result: ExecutionResult) -> Self {
        Self {
            mensaje: message.to_string(),
            payload: EnvelopePayload::Deleted(result),
        }
    }
}

// Response de error
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub mensaje: String,
}

impl ErrorResponse {
    pub fn new(message: String) -> Self {
        Self { mensaje: message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_labels() {
        let result = ExecutionResult {
            rows_affected: 1,
            last_insert_rowid: Some(9),
        };

        assert_eq!(
            serde_json::to_value(ApiResponse::created("Tarjeta creada", result)).unwrap(),
            json!({
                "mensaje": "Tarjeta creada",
                "usuario": { "rowsAffected": 1, "lastInsertRowid": 9 }
            })
        );

        let modified = ExecutionResult {
            rows_affected: 1,
            last_insert_rowid: None,
        };
        let updated = serde_json::to_value(ApiResponse::updated("Tarjeta actualizada", modified)).unwrap();
        assert_eq!(updated["tarjeta"]["rowsAffected"], 1);
        assert!(updated["tarjeta"]["lastInsertRowid"].is_null());

        let deleted = serde_json::to_value(ApiResponse::deleted("Tarjeta eliminada", modified)).unwrap();
        assert_eq!(deleted["mensaje"], "Tarjeta eliminada");
        assert!(deleted.get("resultado").is_some());
    }

    #[test]
    fn test_error_response_has_only_message() {
        let value = serde_json::to_value(ErrorResponse::new("Tarjeta no encontrada".into())).unwrap();
        assert_eq!(value, json!({ "mensaje": "Tarjeta no encontrada" }));
    }
}
