use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

/// Handler for `GET /healthz`: liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz`: readiness check.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Handler for `GET /health`, kept for clients that expect a JSON body.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
