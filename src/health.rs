use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub keywords: usize,
    /// No keywords loaded; every verdict will be "not sponsored".
    pub degraded: bool,
}

#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let matcher = state.pipeline.matcher();
    let degraded = matcher.is_degraded();
    if degraded {
        warn!("Health check: keyword configuration is degraded");
    }

    Json(HealthResponse {
        status: "OK".to_string(),
        keywords: matcher.keywords().len(),
        degraded,
    })
}
