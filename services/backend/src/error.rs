use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use nomnom_domain::error::DomainError;

/// Backend service error variants.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Utilizador não encontrado")]
    UtilizadorNotFound,
    #[error("Receita não encontrada")]
    RecipeNotFound,
    #[error("Item não encontrado")]
    StockItemNotFound,
    #[error("Email é obrigatório")]
    MissingEmail,
    #[error("Parâmetros de consulta inválidos")]
    InvalidQuery,
    #[error("Corpo do pedido inválido: {0}")]
    InvalidBody(String),
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

impl BackendError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UtilizadorNotFound => "UTILIZADOR_NOT_FOUND",
            Self::RecipeNotFound => "RECIPE_NOT_FOUND",
            Self::StockItemNotFound => "STOCK_ITEM_NOT_FOUND",
            Self::MissingEmail => "MISSING_EMAIL",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::InvalidBody(_) => "INVALID_BODY",
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

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UtilizadorNotFound | Self::RecipeNotFound | Self::StockItemNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::MissingEmail
            | Self::InvalidQuery
            | Self::InvalidBody(_)
            | Self::Invalid(_)
            | Self::SignUpFailed
            | Self::AuthRejected(_) => StatusCode::BAD_REQUEST,
            Self::EmailAlreadyRegistered => StatusCode::CONFLICT,
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
