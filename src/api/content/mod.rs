//! Public routes serving wiki content

mod downloads;
mod pages;

use axum::{routing::get, Router};

use super::state::AppState;

pub use downloads::DownloadParams;

/// Create the content router
pub fn create_content_router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/page/{key}", get(pages::space_home))
        .route("/page/{key}/{title}", get(pages::page_by_title))
        .route("/download/{id}/{file}", get(downloads::download))
}
