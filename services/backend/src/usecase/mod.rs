pub mod auth;
pub mod ingrediente;
pub mod receita;
pub mod stock;
pub mod utilizador;
