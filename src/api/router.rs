use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::admin;
use super::content;
use super::health;
use super::middleware::logging_middleware;
use super::state::AppState;
use super::types::ApiError;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(content::create_content_router())
        .nest("/admin", admin::create_admin_router())
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> ApiError {
    ApiError::not_found("The requested resource does not exist")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::content::MockContentSource;
    use crate::domain::{Attachment, DomainError, Page, Space, TrustedHtml};
    use crate::infrastructure::cache::ContentCache;

    fn space(key: &str, homepage_id: &str) -> Space {
        Space {
            id: format!("id-{}", key),
            key: key.to_string(),
            name: format!("{} space", key),
            space_type: "global".to_string(),
            link: format!("/page/{}", key),
            description: String::new(),
            homepage_id: homepage_id.to_string(),
        }
    }

    fn page(id: &str, title: &str) -> Page {
        Page {
            id: id.to_string(),
            page_type: "page".to_string(),
            status: "current".to_string(),
            title: title.to_string(),
            link: format!("/pages/{}", id),
            body: "<p>hello</p>".to_string(),
            body_html: TrustedHtml::new("<p>hello</p>"),
        }
    }

    const ADMIN_TOKEN: &str = "admin-secret";

    fn router(source: MockContentSource) -> Router {
        let cache = ContentCache::new(source);
        create_router(AppState::new(Arc::new(cache), "Test Wiki").with_admin_token(ADMIN_TOKEN))
    }

    fn reset_request(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("POST").uri("/admin/cache/reset");

        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }

        builder.body(Body::empty()).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn source_with_spaces() -> MockContentSource {
        let mut source = MockContentSource::new();
        source
            .expect_fetch_spaces()
            .returning(|| Ok(vec![space("DEV", "100"), space("OPS", "200")]));
        source
    }

    #[tokio::test]
    async fn test_index_lists_spaces() {
        let app = router(source_with_spaces());

        let response = app.oneshot(get("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["title"], "Test Wiki");
        assert_eq!(body["spaces"].as_array().unwrap().len(), 2);
        assert_eq!(body["spaces"][0]["key"], "DEV");
    }

    #[tokio::test]
    async fn test_space_home_resolves_homepage() {
        let mut source = source_with_spaces();
        source
            .expect_fetch_page_by_id()
            .withf(|key, id| key == "DEV" && id == "100")
            .times(1)
            .returning(|_, id| Ok(page(id, "Dev Home")));

        let response = router(source).oneshot(get("/page/DEV")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["title"], "Dev Home");
        assert_eq!(body["page"]["id"], "100");
        assert_eq!(body["page"]["body_html"], "<p>hello</p>");
        assert_eq!(body["spaces"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_space_is_not_found() {
        let mut source = source_with_spaces();
        source.expect_fetch_page_by_id().never();

        let response = router(source).oneshot(get("/page/NOPE")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["error"]["type"], "not_found_error");
    }

    #[tokio::test]
    async fn test_page_by_title() {
        let mut source = source_with_spaces();
        source
            .expect_fetch_page_by_title()
            .withf(|key, title| key == "DEV" && title == "Release+Notes")
            .times(1)
            .returning(|_, _| Ok(page("300", "Release Notes")));

        let response = router(source)
            .oneshot(get("/page/DEV/Release+Notes"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["title"], "Release Notes");
        assert_eq!(body["page"]["type"], "page");
    }

    #[tokio::test]
    async fn test_missing_page_is_not_found() {
        let mut source = source_with_spaces();
        source
            .expect_fetch_page_by_title()
            .returning(|_, title| {
                Err(DomainError::not_found(format!("Page '{}' not found", title)))
            });

        let response = router(source).oneshot(get("/page/DEV/Missing")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_remote_failure_is_server_error() {
        let mut source = MockContentSource::new();
        source
            .expect_fetch_spaces()
            .returning(|| Err(DomainError::remote("status 502 Bad Gateway")));

        let response = router(source).oneshot(get("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["error"]["type"], "server_error");
    }

    #[tokio::test]
    async fn test_download_returns_bytes_with_content_type() {
        let mut source = MockContentSource::new();
        source
            .expect_fetch_attachment()
            .withf(|request| {
                request.content_id == "100"
                    && request.filename == "logo.png"
                    && request.version == "2"
                    && request.modification_date == "1700000000000"
            })
            .times(1)
            .returning(|_| Ok(Attachment::new(vec![0x89u8, 0x50, 0x4e, 0x47], "image/png")));

        let response = router(source)
            .oneshot(get(
                "/download/100/logo.png?version=2&modificationDate=1700000000000&api=v2",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/png"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(bytes.as_ref(), &[0x89, 0x50, 0x4e, 0x47]);
    }

    #[tokio::test]
    async fn test_reset_cache() {
        let mut source = MockContentSource::new();
        source
            .expect_fetch_spaces()
            .times(2)
            .returning(|| Ok(vec![space("DEV", "100")]));

        let app = router(source);

        let response = app.clone().oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(reset_request(Some("Bearer admin-secret")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_reset_requires_admin_token() {
        let mut source = MockContentSource::new();
        source
            .expect_fetch_spaces()
            .times(1)
            .returning(|| Ok(vec![space("DEV", "100")]));

        let app = router(source);
        app.clone().oneshot(get("/")).await.unwrap();

        let response = app.clone().oneshot(reset_request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = json_body(response).await;
        assert_eq!(body["error"]["type"], "authentication_error");

        let response = app
            .clone()
            .oneshot(reset_request(Some("Bearer wrong")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        // Cache survived the refused resets
        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_reset_is_disabled_without_configured_token() {
        let cache = ContentCache::new(MockContentSource::new());
        let app = create_router(AppState::new(Arc::new(cache), "Test Wiki"));

        let response = app
            .oneshot(reset_request(Some("Bearer anything")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = json_body(response).await;
        assert_eq!(body["error"]["type"], "permission_error");
    }

    #[tokio::test]
    async fn test_health_reports_cache_stats() {
        let app = router(source_with_spaces());

        app.clone().oneshot(get("/")).await.unwrap();
        let response = app.oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["cache"]["entries"], 1);
        assert_eq!(body["cache"]["ttl_secs"], 1800);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_not_found() {
        let app = router(MockContentSource::new());

        let response = app.oneshot(get("/no/such/route/here")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["error"]["type"], "not_found_error");
    }
}
