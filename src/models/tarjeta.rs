//! Modelo de Tarjeta
//!
//! Mapea la tabla `tarjeta`. `categoria_id` no está restringida por una
//! clave foránea: puede apuntar a una categoría que ya no existe.
//!
//! La tabla pertenece a la base remota y puede no haberla creado este
//! servicio, así que los campos del cliente se leen como opcionales.

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// Fila de la tabla tarjeta
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct Tarjeta {
    pub tarj_id: i64,
    pub title: Option<String>,
    pub value: Option<f64>,
    pub description: Option<String>,
    pub images: Option<String>,
    pub categoria_id: Option<i64>,
    pub create_ad: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// Tarjeta con el nombre de su categoría (LEFT JOIN)
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct TarjetaConCategoria {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub tarjeta: Tarjeta,
    pub categoria_nombre: Option<String>,
}
