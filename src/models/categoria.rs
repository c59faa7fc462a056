use serde::Serialize;
use sqlx::FromRow;

/// Fila de la tabla categoria
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct Categoria {
    pub id: i64,
    pub nombre: Option<String>,
}
