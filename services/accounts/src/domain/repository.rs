#![allow(async_fn_in_trait)]

use nomnom_domain::paging::RowRange;
use nomnom_domain::profile::ProfilePatch;

use crate::domain::types::{Account, AccountPatch, AuthSession, Identity, Utilizador};
use crate::error::AccountsError;

/// Port for the hosted auth provider.
pub trait AuthProvider: Send + Sync {
    /// Returns `None` when the provider accepted the request but created no user.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Option<Identity>, AccountsError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AccountsError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), AccountsError>;

    async fn current_user(&self, access_token: &str) -> Result<Identity, AccountsError>;
}

/// Repository for the `profiles` table.
pub trait AccountRepository: Send + Sync {
    async fn list(&self, range: RowRange) -> Result<Vec<Account>, AccountsError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Account>, AccountsError>;

    /// Returns the updated row, or `None` when no row matched.
    async fn update(&self, id: &str, patch: &AccountPatch)
    -> Result<Option<Account>, AccountsError>;

    /// Returns how many rows were removed.
    async fn delete(&self, id: &str) -> Result<usize, AccountsError>;
}

/// Repository for `Utilizador` profiles.
pub trait UtilizadorRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Utilizador>, AccountsError>;

    /// `UtilizadorExists` when the email already has a row.
    async fn insert(&self, email: &str, patch: &ProfilePatch) -> Result<Utilizador, AccountsError>;

    async fn update(
        &self,
        email: &str,
        patch: &ProfilePatch,
    ) -> Result<Option<Utilizador>, AccountsError>;
}
