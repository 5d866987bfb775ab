//! Test utilities for NomNom services.
//!
//! Bearer header helpers and a `wiremock` stand-in for the hosted platform.
//! Use from `#[cfg(test)]` code and `tests/` only.

pub mod auth;
pub mod platform;
