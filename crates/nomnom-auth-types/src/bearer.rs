//! `Authorization: Bearer <token>` extractor.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::response::{IntoResponse, Response};
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};
use http::StatusCode;
use http::request::Parts;

/// Access token issued by the hosted auth provider, taken verbatim from the
/// `Authorization` header. Validation is left to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

impl BearerToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_parts(parts: &Parts) -> Option<Self> {
        parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .map(|auth| auth.token().trim().to_owned())
            .filter(|token| !token.is_empty())
            .map(Self)
    }
}

/// 401 with the shared `{kind, message}` error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingBearer;

impl IntoResponse for MissingBearer {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "kind": "UNAUTHENTICATED",
            "message": "Não autenticado",
        });
        (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = MissingBearer;

    // Header parsing is synchronous; the returned future owns its result so it
    // does not borrow `parts`.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = Self::from_parts(parts);
        async move { token.ok_or(MissingBearer) }
    }
}

impl<S> OptionalFromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Option<Self>, Self::Rejection>> + Send {
        let token = Self::from_parts(parts);
        async move { Ok(token) }
    }
}
