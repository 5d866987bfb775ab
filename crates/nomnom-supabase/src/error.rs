use reqwest::StatusCode;
use serde::Deserialize;

/// Closed set of failures raised by the remote client.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// Sign-up for an email that already has an identity.
    #[error("email already registered")]
    AlreadyRegistered,
    #[error("rate limited: {0}")]
    RateLimited(String),
    /// Wrong email/password pair on sign-in.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Missing, expired or rejected access token / API key.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("not found")]
    NotFound,
    /// Unique-constraint violation in the table store.
    #[error("conflict: {0}")]
    Conflict(String),
    /// A filter value the column type cannot parse, e.g. a non-UUID id.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Any other 4xx from the auth provider; message is the provider's.
    #[error("{message}")]
    AuthRejected { status: u16, message: String },
    #[error("upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("invalid base url: {0}")]
    InvalidUrl(String),
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),
}

/// PostgREST error payload: `{code, message, details, hint}`.
#[derive(Debug, Default, Deserialize)]
struct PostgrestErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// GoTrue error payload. Newer releases send `{code, error_code, msg}`,
/// older ones `{error, error_description}`.
#[derive(Debug, Default, Deserialize)]
struct GoTrueErrorBody {
    error_code: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

pub(crate) fn classify_rest(status: StatusCode, body: &str) -> RemoteError {
    let parsed: PostgrestErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed.message.unwrap_or_else(|| body.to_owned());
    match (status.as_u16(), parsed.code.as_deref()) {
        (_, Some("23505")) | (409, _) => RemoteError::Conflict(message),
        (_, Some("PGRST116")) => RemoteError::NotFound,
        (_, Some("22P02")) => RemoteError::InvalidInput(message),
        (401 | 403, _) => RemoteError::Unauthorized(message),
        (429, _) => RemoteError::RateLimited(message),
        (status, _) => RemoteError::Upstream { status, message },
    }
}

pub(crate) fn classify_auth(status: StatusCode, body: &str) -> RemoteError {
    let parsed: GoTrueErrorBody = serde_json::from_str(body).unwrap_or_default();
    let code = parsed.error_code.or(parsed.error);
    let message = parsed
        .msg
        .or(parsed.error_description)
        .or(parsed.message)
        .unwrap_or_else(|| body.to_owned());

    match code.as_deref() {
        Some("user_already_exists" | "email_exists") => return RemoteError::AlreadyRegistered,
        Some("invalid_credentials" | "invalid_grant") => return RemoteError::InvalidCredentials,
        Some("user_not_found") => return RemoteError::NotFound,
        Some("bad_jwt" | "no_authorization" | "session_not_found" | "session_expired") => {
            return RemoteError::Unauthorized(message);
        }
        Some(c) if c.starts_with("over_") && c.ends_with("rate_limit") => {
            return RemoteError::RateLimited(message);
        }
        _ => {}
    }

    match status.as_u16() {
        429 => RemoteError::RateLimited(message),
        401 | 403 => RemoteError::Unauthorized(message),
        status @ 400..=499 => RemoteError::AuthRejected { status, message },
        status => RemoteError::Upstream { status, message },
    }
}
