use nomnom_supabase::{AuthUser, RemoteError, Session, SupabaseClient};
use serde_json::json;

use crate::domain::repository::AuthProvider;
use crate::domain::types::{AuthSession, Identity, MetadataPatch, SignUpResult};
use crate::error::BackendError;

/// Map auth-provider failures onto service errors.
fn auth_error(err: RemoteError, context: &'static str) -> BackendError {
    match err {
        RemoteError::AlreadyRegistered => BackendError::EmailAlreadyRegistered,
        RemoteError::RateLimited(_) => BackendError::RateLimited,
        RemoteError::InvalidCredentials => BackendError::InvalidCredentials,
        RemoteError::Unauthorized(_) | RemoteError::NotFound => BackendError::InvalidToken,
        RemoteError::AuthRejected { message, .. } => BackendError::AuthRejected(message),
        other => BackendError::Internal(anyhow::Error::new(other).context(context)),
    }
}

fn identity_from(user: AuthUser) -> Identity {
    Identity {
        name: user.metadata_str("name").map(str::to_owned),
        avatar_url: user.metadata_str("avatar_url").map(str::to_owned),
        id: user.id,
        email: user.email,
        created_at: user.created_at,
    }
}

fn session_from(session: Session) -> AuthSession {
    AuthSession {
        access_token: session.access_token,
        refresh_token: session.refresh_token,
        expires_in: session.expires_in,
        token_type: session.token_type,
        user: identity_from(session.user),
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
    ) -> Result<SignUpResult, BackendError> {
        let outcome = self
            .client
            .auth()
            .sign_up(email, password, json!({ "name": name }))
            .await
            .map_err(|e| auth_error(e, "sign up"))?;
        Ok(SignUpResult {
            user: outcome.user.map(identity_from),
            session: outcome.session.map(session_from),
        })
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, BackendError> {
        self.client
            .auth()
            .sign_in_with_password(email, password)
            .await
            .map(session_from)
            .map_err(|e| auth_error(e, "sign in"))
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), BackendError> {
        self.client
            .auth()
            .sign_out(access_token)
            .await
            .map_err(|e| auth_error(e, "sign out"))
    }

    async fn current_user(&self, access_token: &str) -> Result<Identity, BackendError> {
        self.client
            .auth()
            .get_user(access_token)
            .await
            .map(identity_from)
            .map_err(|e| auth_error(e, "get user"))
    }

    async fn update_metadata(
        &self,
        user_id: &str,
        patch: &MetadataPatch,
    ) -> Result<Identity, BackendError> {
        self.client
            .auth()
            .admin_update_user_by_id(user_id, &json!({ "user_metadata": patch }))
            .await
            .map(identity_from)
            .map_err(|e| auth_error(e, "update user metadata"))
    }
}
