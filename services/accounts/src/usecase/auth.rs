use crate::domain::repository::AuthProvider;
use crate::domain::types::{AuthSession, Identity};
use crate::error::AccountsError;

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginUseCase<A: AuthProvider> {
    pub auth: A,
}

impl<A: AuthProvider> LoginUseCase<A> {
    pub async fn execute(&self, email: &str, password: &str) -> Result<AuthSession, AccountsError> {
        match self.auth.sign_in(email, password).await {
            Err(AccountsError::AuthRejected(_)) => Err(AccountsError::InvalidCredentials),
            other => other,
        }
    }
}

// ── Logout ───────────────────────────────────────────────────────────────────

pub struct LogoutUseCase<A: AuthProvider> {
    pub auth: A,
}

impl<A: AuthProvider> LogoutUseCase<A> {
    pub async fn execute(&self, access_token: Option<&str>) -> Result<(), AccountsError> {
        let Some(token) = access_token else {
            return Ok(());
        };
        match self.auth.sign_out(token).await {
            Ok(()) | Err(AccountsError::InvalidToken) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

// ── Me ───────────────────────────────────────────────────────────────────────

pub struct CurrentUserUseCase<A: AuthProvider> {
    pub auth: A,
}

impl<A: AuthProvider> CurrentUserUseCase<A> {
    pub async fn execute(&self, access_token: &str) -> Result<Identity, AccountsError> {
        self.auth.current_user(access_token).await
    }
}
