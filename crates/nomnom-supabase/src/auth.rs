use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::client::{SupabaseClient, expect_success, read_json};
use crate::error::{RemoteError, classify_auth};

/// Identity as returned by the auth provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user_metadata: Map<String, Value>,
}

impl AuthUser {
    /// String entry of `user_metadata`, if present.
    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.user_metadata.get(key).and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub token_type: String,
    pub user: AuthUser,
}

/// Result of a sign-up. `session` is absent while email confirmation is pending.
#[derive(Debug, Clone, PartialEq)]
pub struct SignUpOutcome {
    pub user: Option<AuthUser>,
    pub session: Option<Session>,
}

// The signup endpoint answers with a session when auto-confirm is on and with a
// bare user otherwise.
#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpBody {
    Session(Session),
    User(AuthUser),
    Empty(Map<String, Value>),
}

/// GoTrue endpoints under `/auth/v1`.
#[derive(Debug, Clone)]
pub struct AuthClient {
    client: SupabaseClient,
}

impl AuthClient {
    pub(crate) fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    /// Register `email`/`password`; `data` lands in `user_metadata`.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        data: Value,
    ) -> Result<SignUpOutcome, RemoteError> {
        let url = self.client.endpoint(&["auth", "v1", "signup"]);
        let resp = self
            .client
            .request(Method::POST, url)
            .json(&json!({ "email": email, "password": password, "data": data }))
            .send()
            .await?;
        let body: SignUpBody = read_json(resp, classify_auth).await?;
        Ok(match body {
            SignUpBody::Session(session) => SignUpOutcome {
                user: Some(session.user.clone()),
                session: Some(session),
            },
            SignUpBody::User(user) => SignUpOutcome {
                user: Some(user),
                session: None,
            },
            SignUpBody::Empty(_) => SignUpOutcome {
                user: None,
                session: None,
            },
        })
    }

    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, RemoteError> {
        let mut url = self.client.endpoint(&["auth", "v1", "token"]);
        url.query_pairs_mut().append_pair("grant_type", "password");
        let resp = self
            .client
            .request(Method::POST, url)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        read_json(resp, classify_auth).await
    }

    /// Revoke the session behind `access_token`.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), RemoteError> {
        let url = self.client.endpoint(&["auth", "v1", "logout"]);
        let resp = self
            .client
            .request_as(Method::POST, url, access_token)
            .send()
            .await?;
        expect_success(resp, classify_auth).await
    }

    /// Resolve the user owning `access_token`.
    pub async fn get_user(&self, access_token: &str) -> Result<AuthUser, RemoteError> {
        let url = self.client.endpoint(&["auth", "v1", "user"]);
        let resp = self
            .client
            .request_as(Method::GET, url, access_token)
            .send()
            .await?;
        read_json(resp, classify_auth).await
    }

    /// Admin update; requires the service-role key. `attributes` follows the
    /// provider's schema, e.g. `{"user_metadata": {"name": "Ana"}}`.
    pub async fn admin_update_user_by_id(
        &self,
        user_id: &str,
        attributes: &Value,
    ) -> Result<AuthUser, RemoteError> {
        let url = self.client.endpoint(&["auth", "v1", "admin", "users", user_id]);
        let resp = self
            .client
            .request(Method::PUT, url)
            .json(attributes)
            .send()
            .await?;
        read_json(resp, classify_auth).await
    }
}
