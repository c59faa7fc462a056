pub mod categoria_dto;
pub mod response_dto;
pub mod tarjeta_dto;
