use axum::{extract::State, http::StatusCode};
use tracing::info;

use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::ApiError;

/// POST /admin/cache/reset
/// Drops every cached entry
pub async fn reset_cache(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<StatusCode, ApiError> {
    info!("Admin requested cache reset");

    state.content.reset()?;

    Ok(StatusCode::NO_CONTENT)
}
