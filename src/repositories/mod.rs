pub mod categoria_repository;
pub mod tarjeta_repository;
