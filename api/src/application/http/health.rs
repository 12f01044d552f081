use axum::{Router, extract::State, routing::get};
use cardfolio_core::domain::health::ports::HealthCheckService;
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(health))]
pub struct HealthApiDoc;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub healthy: bool,
    pub database_latency_ms: u64,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Health check",
    description = "Reports whether the document store answers, and how fast.",
    responses(
        (status = 200, body = HealthResponse),
        (status = 503, body = ApiErrorResponse),
    )
)]
pub async fn health(State(state): State<AppState>) -> Result<Response<HealthResponse>, ApiError> {
    let database_latency_ms = state.service.health().await.map_err(|e| {
        warn!("Health check failed: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(HealthResponse {
        healthy: true,
        database_latency_ms,
    }))
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{root_path}/health"), get(health))
}
