//! Admin authentication via a static bearer token

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::{debug, warn};

use crate::api::state::AppState;
use crate::api::types::ApiError;

/// Extractor that requires `Authorization: Bearer <admin_token>`
///
/// Without a configured token every admin request is refused.
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.admin_token.as_deref() else {
            return Err(ApiError::forbidden("Admin routes are disabled"));
        };

        let provided = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match provided {
            Some(token) if token == expected => {
                debug!("Admin access granted");
                Ok(RequireAdmin)
            }
            Some(_) => {
                warn!("Admin access denied: invalid token");
                Err(ApiError::unauthorized("Invalid admin token"))
            }
            None => Err(ApiError::unauthorized(
                "Admin access required. Provide Authorization: Bearer <token>",
            )),
        }
    }
}
