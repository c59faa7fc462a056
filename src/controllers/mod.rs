pub mod categoria_controller;
pub mod tarjeta_controller;
