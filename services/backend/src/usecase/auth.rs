use chrono::{DateTime, Utc};

use nomnom_domain::account::{validate_account_name, validate_email, validate_password, validate_picture_url};
use nomnom_domain::profile::ProfilePatch;

use crate::domain::repository::{AuthProvider, UtilizadorRepository};
use crate::domain::types::{AuthSession, Identity, MetadataPatch};
use crate::error::BackendError;

/// Public view of an account.
#[derive(Debug, Clone, PartialEq)]
pub struct UserView {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl UserView {
    fn from_identity(identity: &Identity, fallback_email: &str, name: String) -> Self {
        Self {
            id: identity.id.clone(),
            email: identity
                .email
                .clone()
                .unwrap_or_else(|| fallback_email.to_owned()),
            name,
            created_at: identity.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutput {
    pub user: UserView,
    /// Absent after a sign-up awaiting email confirmation.
    pub session: Option<AuthSession>,
    /// A `Utilizador` row exists for the email.
    pub profile_complete: bool,
}

pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl SignUpInput {
    fn validate(&self) -> Result<(), BackendError> {
        validate_email(&self.email)?;
        validate_password(&self.password)?;
        validate_account_name(&self.name)?;
        Ok(())
    }
}

// ── Register ─────────────────────────────────────────────────────────────────

/// Sign up and seed the `Utilizador` row with `{email, nome}`.
pub struct RegisterUseCase<A: AuthProvider, U: UtilizadorRepository> {
    pub auth: A,
    pub utilizadores: U,
}

impl<A: AuthProvider, U: UtilizadorRepository> RegisterUseCase<A, U> {
    pub async fn execute(&self, input: SignUpInput) -> Result<LoginOutput, BackendError> {
        input.validate()?;
        let name = input.name.trim().to_owned();
        let email = input.email.trim();

        let outcome = self.auth.sign_up(email, &input.password, &name).await?;
        let user = outcome.user.ok_or(BackendError::SignUpFailed)?;

        let seed = ProfilePatch {
            nome: Some(name.clone()),
            ..Default::default()
        };
        if let Err(e) = self.utilizadores.insert(email, &seed).await {
            tracing::warn!(error = %e, email, "failed to create utilizador after sign-up");
        }

        Ok(LoginOutput {
            user: UserView::from_identity(&user, email, name),
            session: outcome.session,
            profile_complete: false,
        })
    }
}

// ── SignUp ───────────────────────────────────────────────────────────────────

pub struct SignUpUseCase<A: AuthProvider> {
    pub auth: A,
}

impl<A: AuthProvider> SignUpUseCase<A> {
    pub async fn execute(&self, input: SignUpInput) -> Result<UserView, BackendError> {
        input.validate()?;
        let name = input.name.trim().to_owned();
        let email = input.email.trim();
        let outcome = self.auth.sign_up(email, &input.password, &name).await?;
        let user = outcome.user.ok_or(BackendError::SignUpFailed)?;
        Ok(UserView::from_identity(&user, email, name))
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginUseCase<A: AuthProvider, U: UtilizadorRepository> {
    pub auth: A,
    pub utilizadores: U,
}

impl<A: AuthProvider, U: UtilizadorRepository> LoginUseCase<A, U> {
    pub async fn execute(&self, email: &str, password: &str) -> Result<LoginOutput, BackendError> {
        let session = match self.auth.sign_in(email, password).await {
            Err(BackendError::AuthRejected(_)) => return Err(BackendError::InvalidCredentials),
            other => other?,
        };
        let metadata_name = session.user.name.clone().unwrap_or_default();

        let (name, profile_complete) = match self.utilizadores.find_by_email(email).await {
            Ok(Some(row)) => (row.nome.unwrap_or(metadata_name), true),
            Ok(None) => (metadata_name, false),
            Err(e) => {
                tracing::warn!(error = %e, email, "utilizador lookup failed during login");
                (metadata_name, false)
            }
        };

        Ok(LoginOutput {
            user: UserView::from_identity(&session.user, email, name),
            session: Some(session),
            profile_complete,
        })
    }
}

// ── Logout ───────────────────────────────────────────────────────────────────

pub struct LogoutUseCase<A: AuthProvider> {
    pub auth: A,
}

impl<A: AuthProvider> LogoutUseCase<A> {
    /// Revoke the session when a token is given. An already invalid token counts as logged out.
    pub async fn execute(&self, access_token: Option<&str>) -> Result<(), BackendError> {
        let Some(token) = access_token else {
            return Ok(());
        };
        match self.auth.sign_out(token).await {
            Ok(()) | Err(BackendError::InvalidToken) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

// ── Me ───────────────────────────────────────────────────────────────────────

pub struct CurrentUserUseCase<A: AuthProvider> {
    pub auth: A,
}

impl<A: AuthProvider> CurrentUserUseCase<A> {
    pub async fn execute(&self, access_token: &str) -> Result<UserView, BackendError> {
        let identity = self.auth.current_user(access_token).await?;
        let name = identity.name.clone().unwrap_or_default();
        Ok(UserView::from_identity(&identity, "", name))
    }
}

// ── UpdateName ───────────────────────────────────────────────────────────────

/// Rename in `user_metadata` and in the `Utilizador` row.
pub struct UpdateNameUseCase<A: AuthProvider, U: UtilizadorRepository> {
    pub auth: A,
    pub utilizadores: U,
}

impl<A: AuthProvider, U: UtilizadorRepository> UpdateNameUseCase<A, U> {
    pub async fn execute(&self, access_token: &str, name: &str) -> Result<UserView, BackendError> {
        let name = validate_account_name(name)?.to_owned();
        let identity = self.auth.current_user(access_token).await?;
        let updated = self
            .auth
            .update_metadata(
                &identity.id,
                &MetadataPatch {
                    name: Some(name.clone()),
                    ..Default::default()
                },
            )
            .await?;

        if let Some(email) = identity.email.as_deref() {
            let patch = ProfilePatch {
                nome: Some(name.clone()),
                ..Default::default()
            };
            self.utilizadores.update(email, &patch).await?;
        }

        Ok(UserView::from_identity(&updated, "", name))
    }
}

// ── UpdatePicture ────────────────────────────────────────────────────────────

pub struct UpdatePictureUseCase<A: AuthProvider> {
    pub auth: A,
}

impl<A: AuthProvider> UpdatePictureUseCase<A> {
    /// Returns the stored avatar URL.
    pub async fn execute(&self, access_token: &str, url: &str) -> Result<String, BackendError> {
        let url = validate_picture_url(url)?.to_owned();
        let identity = self.auth.current_user(access_token).await?;
        let updated = self
            .auth
            .update_metadata(
                &identity.id,
                &MetadataPatch {
                    avatar_url: Some(url.clone()),
                    ..Default::default()
                },
            )
            .await?;
        Ok(updated.avatar_url.unwrap_or(url))
    }
}
