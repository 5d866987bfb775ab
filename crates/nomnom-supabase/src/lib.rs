//! Thin async client for the hosted backend-as-a-service platform.
//!
//! Two surfaces share one [`SupabaseClient`] handle:
//!
//! - [`query::QueryBuilder`]: table-scoped PostgREST requests
//!   (`select/eq/in_/gte/lte/order/limit/range`, then `execute`,
//!   `maybe_single`, `insert`, `update` or `delete`).
//! - [`auth::AuthClient`]: GoTrue sign-up, password sign-in, sign-out,
//!   current user and admin user updates.
//!
//! Failures surface as [`RemoteError`], classified from the platform's
//! structured error codes and HTTP status, never from message text.

pub mod auth;
pub mod client;
pub mod error;
pub mod query;

pub use auth::{AuthClient, AuthUser, Session, SignUpOutcome};
pub use client::{SupabaseClient, SupabaseConfig};
pub use error::RemoteError;
pub use query::QueryBuilder;
