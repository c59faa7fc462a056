//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente a las
//! tablas `tarjeta` y `categoria`.

pub mod categoria;
pub mod tarjeta;

pub use categoria::Categoria;
pub use tarjeta::{Tarjeta, TarjetaConCategoria};
