pub mod auth;
pub mod ingrediente;
pub mod lista_compras;
pub mod receita;
pub mod root;
pub mod utilizador;
