//! Health check endpoint

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::state::AppState;
use crate::domain::CacheStats;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Reports the service version and the state of the active cache store
///
/// Never queries the remote wiki.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = match state.content.stats() {
        Ok(stats) => HealthResponse {
            status: HealthStatus::Healthy,
            version: env!("CARGO_PKG_VERSION").to_string(),
            cache: Some(stats),
            message: None,
        },
        Err(e) => HealthResponse {
            status: HealthStatus::Degraded,
            version: env!("CARGO_PKG_VERSION").to_string(),
            cache: None,
            message: Some(e.to_string()),
        },
    };

    (StatusCode::OK, Json(response))
}
