use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{Page, Space};

/// Space index
#[derive(Debug, Serialize)]
pub struct IndexView<'a> {
    pub title: &'a str,
    pub spaces: &'a [Space],
}

/// A rendered page together with the space list for navigation
#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    pub title: &'a str,
    pub page: &'a Page,
    pub spaces: &'a [Space],
}

/// GET /
pub async fn index(State(state): State<AppState>) -> Result<Response, ApiError> {
    let spaces = state.content.get_spaces().await?;

    Ok(Json(IndexView {
        title: &state.site_title,
        spaces: &spaces,
    })
    .into_response())
}

/// GET /page/{key}
/// Homepage of a space
pub async fn space_home(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response, ApiError> {
    let spaces = state.content.get_spaces().await?;
    let space = state.content.get_space(&key).await?;

    debug!(space = %key, homepage_id = %space.homepage_id, "Resolving space homepage");

    let page = state
        .content
        .get_page_by_id(&space.key, &space.homepage_id)
        .await?;

    Ok(Json(PageView {
        title: &page.title,
        page: &page,
        spaces: &spaces,
    })
    .into_response())
}

/// GET /page/{key}/{title}
pub async fn page_by_title(
    State(state): State<AppState>,
    Path((key, title)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let spaces = state.content.get_spaces().await?;
    let page = state.content.get_page_by_title(&key, &title).await?;

    Ok(Json(PageView {
        title: &page.title,
        page: &page,
        spaces: &spaces,
    })
    .into_response())
}
