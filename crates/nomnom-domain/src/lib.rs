//! Domain types shared across the NomNom services.
//!
//! Pure types and validation only; no framework or network dependencies.

pub mod account;
pub mod error;
pub mod nutrition;
pub mod paging;
pub mod profile;
