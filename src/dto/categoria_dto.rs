use serde::Deserialize;
use validator::Validate;

// Cuerpo de POST /categoria y PUT /categoria/:id
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CategoriaRequest {
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,
}
