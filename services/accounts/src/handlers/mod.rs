pub mod account;
pub mod auth;
pub mod root;
pub mod utilizador;
