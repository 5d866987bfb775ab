use anyhow::Context as _;
use serde::Serialize;

use nomnom_domain::paging::RowRange;
use nomnom_domain::profile::ProfilePatch;
use nomnom_supabase::{RemoteError, SupabaseClient};

use crate::domain::repository::{AccountRepository, UtilizadorRepository};
use crate::domain::types::{Account, AccountPatch, Utilizador};
use crate::error::AccountsError;

const PROFILES: &str = "profiles";
const UTILIZADOR: &str = "Utilizador";

// ── Account repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct SupabaseAccountRepository {
    pub client: SupabaseClient,
}

impl AccountRepository for SupabaseAccountRepository {
    async fn list(&self, range: RowRange) -> Result<Vec<Account>, AccountsError> {
        let rows = self
            .client
            .from(PROFILES)
            .order("created_at", true)
            .range(range.from, range.to)
            .execute()
            .await
            .context("list profiles")?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Account>, AccountsError> {
        match self.client.from(PROFILES).eq("id", id).maybe_single().await {
            // A malformed id cannot match any row.
            Err(RemoteError::InvalidInput(_)) => Ok(None),
            other => Ok(other.context("find profile by id")?),
        }
    }

    async fn update(
        &self,
        id: &str,
        patch: &AccountPatch,
    ) -> Result<Option<Account>, AccountsError> {
        let rows: Vec<Account> = match self.client.from(PROFILES).eq("id", id).update(patch).await {
            Err(RemoteError::InvalidInput(_)) => return Ok(None),
            other => other.context("update profile")?,
        };
        Ok(rows.into_iter().next())
    }

    async fn delete(&self, id: &str) -> Result<usize, AccountsError> {
        match self.client.from(PROFILES).eq("id", id).delete().await {
            Err(RemoteError::InvalidInput(_)) => Ok(0),
            other => Ok(other.context("delete profile")?),
        }
    }
}

// ── Utilizador repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct SupabaseUtilizadorRepository {
    pub client: SupabaseClient,
}

#[derive(Serialize)]
struct UtilizadorInsert<'a> {
    email: &'a str,
    #[serde(flatten)]
    patch: &'a ProfilePatch,
}

impl UtilizadorRepository for SupabaseUtilizadorRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Utilizador>, AccountsError> {
        let row = self
            .client
            .from(UTILIZADOR)
            .eq("email", email)
            .maybe_single()
            .await
            .context("find utilizador by email")?;
        Ok(row)
    }

    async fn insert(&self, email: &str, patch: &ProfilePatch) -> Result<Utilizador, AccountsError> {
        let rows: Vec<Utilizador> = match self
            .client
            .from(UTILIZADOR)
            .insert(&UtilizadorInsert { email, patch })
            .await
        {
            Err(RemoteError::Conflict(_)) => return Err(AccountsError::UtilizadorExists),
            other => other.context("insert utilizador")?,
        };
        Ok(rows.into_iter().next().context("insert utilizador returned no row")?)
    }

    async fn update(
        &self,
        email: &str,
        patch: &ProfilePatch,
    ) -> Result<Option<Utilizador>, AccountsError> {
        let rows: Vec<Utilizador> = self
            .client
            .from(UTILIZADOR)
            .eq("email", email)
            .update(patch)
            .await
            .context("update utilizador")?;
        Ok(rows.into_iter().next())
    }
}
