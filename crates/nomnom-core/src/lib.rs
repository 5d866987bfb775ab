//! Ambient plumbing shared by every NomNom service: configuration loading,
//! tracing setup, health endpoints and the common tower layers.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
