use nomnom_supabase::{AuthUser, RemoteError, SupabaseClient};
use serde_json::json;

use crate::domain::repository::AuthProvider;
use crate::domain::types::{AuthSession, Identity};
use crate::error::AccountsError;

fn auth_error(err: RemoteError, context: &'static str) -> AccountsError {
    match err {
        RemoteError::AlreadyRegistered => AccountsError::EmailAlreadyRegistered,
        RemoteError::RateLimited(_) => AccountsError::RateLimited,
        RemoteError::InvalidCredentials => AccountsError::InvalidCredentials,
        RemoteError::Unauthorized(_) | RemoteError::NotFound => AccountsError::InvalidToken,
        RemoteError::AuthRejected { message, .. } => AccountsError::AuthRejected(message),
        other => AccountsError::Internal(anyhow::Error::new(other).context(context)),
    }
}

fn identity_from(user: AuthUser) -> Identity {
    Identity {
        name: user.metadata_str("name").map(str::to_owned),
        id: user.id,
        email: user.email,
        created_at: user.created_at,
    }
}

#[derive(Clone)]
pub struct SupabaseAuthProvider {
    pub client: SupabaseClient,
}

impl AuthProvider for SupabaseAuthProvider {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Option<Identity>, AccountsError> {
        let outcome = self
            .client
            .auth()
            .sign_up(email, password, json!({ "name": name }))
            .await
            .map_err(|e| auth_error(e, "sign up"))?;
        Ok(outcome.user.map(identity_from))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AccountsError> {
        let session = self
            .client
            .auth()
            .sign_in_with_password(email, password)
            .await
            .map_err(|e| auth_error(e, "sign in"))?;
        Ok(AuthSession {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            expires_in: session.expires_in,
            token_type: session.token_type,
            user: identity_from(session.user),
        })
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AccountsError> {
        self.client
            .auth()
            .sign_out(access_token)
            .await
            .map_err(|e| auth_error(e, "sign out"))
    }

    async fn current_user(&self, access_token: &str) -> Result<Identity, AccountsError> {
        self.client
            .auth()
            .get_user(access_token)
            .await
            .map(identity_from)
            .map_err(|e| auth_error(e, "get user"))
    }
}
