//! Utilidades de validación
//!
//! Extractor de cuerpos JSON tipados y validados, y conversión de los
//! identificadores de ruta.

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::errors::{not_found_error, AppError, AppResult};

/// Cuerpo JSON deserializado y validado antes de llegar al controlador
///
/// Un cuerpo mal formado o que no cumple las reglas de `Validate` se
/// rechaza con 400 sin ejecutar ninguna sentencia.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Convertir un identificador de ruta a su clave entera
///
/// Un identificador no numérico no puede coincidir con ninguna fila, así
/// que se responde igual que una fila inexistente.
pub fn parse_id(raw: &str, not_found_message: &str) -> AppResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| not_found_error(not_found_message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_integers() {
        assert_eq!(parse_id("42", "no").unwrap(), 42);
        assert_eq!(parse_id(" 7 ", "no").unwrap(), 7);
    }

    #[test]
    fn test_parse_id_maps_garbage_to_not_found() {
        let err = parse_id("abc", "Tarjeta no encontrada").unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Tarjeta no encontrada"));
    }
}
