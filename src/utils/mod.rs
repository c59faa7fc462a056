//! Utilidades del sistema
//!
//! Manejo de errores y validación de las peticiones.

pub mod errors;
pub mod validation;

pub use errors::{AppError, AppResult};
pub use validation::ValidatedJson;
