use nomnom_domain::account::{validate_account_name, validate_email, validate_password};
use nomnom_domain::paging::LimitOffset;

use crate::domain::repository::{AccountRepository, AuthProvider};
use crate::domain::types::{Account, AccountPatch};
use crate::error::AccountsError;

// ── CreateAccount ────────────────────────────────────────────────────────────

pub struct CreateAccountInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register with the auth provider. The `profiles` row is derived remotely.
pub struct CreateAccountUseCase<A: AuthProvider> {
    pub auth: A,
}

impl<A: AuthProvider> CreateAccountUseCase<A> {
    pub async fn execute(&self, input: CreateAccountInput) -> Result<Account, AccountsError> {
        let name = validate_account_name(&input.name)?;
        let email = validate_email(&input.email)?;
        validate_password(&input.password)?;

        let user = self
            .auth
            .sign_up(email, &input.password, name)
            .await?
            .ok_or(AccountsError::SignUpFailed)?;

        Ok(Account {
            id: user.id,
            email: user.email.unwrap_or_else(|| email.to_owned()),
            name: name.to_owned(),
            created_at: user.created_at,
        })
    }
}

// ── ListAccounts ─────────────────────────────────────────────────────────────

pub struct ListAccountsUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> ListAccountsUseCase<R> {
    pub async fn execute(&self, page: LimitOffset) -> Result<Vec<Account>, AccountsError> {
        let range = page.validate()?;
        self.repo.list(range).await
    }
}

// ── GetAccount ───────────────────────────────────────────────────────────────

pub struct GetAccountUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> GetAccountUseCase<R> {
    pub async fn execute(&self, id: &str) -> Result<Account, AccountsError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AccountsError::AccountNotFound)
    }
}

// ── UpdateAccount ────────────────────────────────────────────────────────────

pub struct UpdateAccountUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> UpdateAccountUseCase<R> {
    /// An empty patch returns the current row.
    pub async fn execute(
        &self,
        id: &str,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<Account, AccountsError> {
        let patch = AccountPatch {
            name: name
                .map(validate_account_name)
                .transpose()?
                .map(str::to_owned),
            email: email.map(validate_email).transpose()?.map(str::to_owned),
        };
        let row = if patch.is_empty() {
            self.repo.find_by_id(id).await?
        } else {
            self.repo.update(id, &patch).await?
        };
        row.ok_or(AccountsError::AccountNotFound)
    }
}

// ── DeleteAccount ────────────────────────────────────────────────────────────

pub struct DeleteAccountUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> DeleteAccountUseCase<R> {
    pub async fn execute(&self, id: &str) -> Result<(), AccountsError> {
        match self.repo.delete(id).await? {
            0 => Err(AccountsError::AccountNotFound),
            removed => {
                tracing::debug!(id, removed, "account deleted");
                Ok(())
            }
        }
    }
}
