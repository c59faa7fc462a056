use serde::Deserialize;
use validator::Validate;

// Cuerpo de POST /tarjeta y PUT /tarjeta/:tarj_id
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TarjetaRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub value: f64,
    pub description: Option<String>,
    pub images: Option<String>,
    pub categoria_id: Option<i64>,
}
