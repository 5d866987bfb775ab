use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use nomnom_domain::error::DomainError;

/// Accounts service error variants.
#[derive(Debug, thiserror::Error)]
pub enum AccountsError {
    #[error("Conta não encontrada")]
    AccountNotFound,
    #[error("Perfil de utilizador não encontrado")]
    UtilizadorNotFound,
    #[error("Perfil de utilizador já existe para este email")]
    UtilizadorExists,
    #[error("Parâmetros de consulta inválidos")]
    InvalidQuery,
    #[error("{0}")]
    Invalid(#[from] DomainError),
    #[error("Erro ao criar conta. Verifique os dados fornecidos.")]
    SignUpFailed,
    #[error("Este email já está registrado.")]
    EmailAlreadyRegistered,
    #[error("Muitas tentativas. Aguarde alguns minutos e tente novamente.")]
    RateLimited,
    #[error("Email ou senha incorretos")]
    InvalidCredentials,
    #[error("Token inválido ou expirado")]
    InvalidToken,
    #[error("Erro de autenticação: {0}")]
    AuthRejected(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AccountsError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AccountNotFound => "ACCOUNT_NOT_FOUND",
            Self::UtilizadorNotFound => "UTILIZADOR_NOT_FOUND",
            Self::UtilizadorExists => "UTILIZADOR_EXISTS",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::Invalid(_) => "INVALID_INPUT",
            Self::SignUpFailed => "SIGN_UP_FAILED",
            Self::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",
            Self::RateLimited => "RATE_LIMITED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::AuthRejected(_) => "AUTH_REJECTED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AccountsError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::AccountNotFound | Self::UtilizadorNotFound => StatusCode::NOT_FOUND,
            Self::UtilizadorExists | Self::EmailAlreadyRegistered => StatusCode::CONFLICT,
            Self::InvalidQuery | Self::Invalid(_) | Self::SignUpFailed | Self::AuthRejected(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::InvalidCredentials | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
