//! Request-side authentication types shared by the NomNom services.

pub mod bearer;
