use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::content::DEFAULT_CONTENT_TYPE;
use crate::domain::AttachmentRequest;

/// Query string carried over from rewritten attachment links
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DownloadParams {
    pub version: String,
    #[serde(rename = "modificationDate")]
    pub modification_date: String,
    pub api: String,
}

impl DownloadParams {
    fn into_request(self, id: String, file: String) -> AttachmentRequest {
        AttachmentRequest::new(id, file)
            .with_version(self.version)
            .with_modification_date(self.modification_date)
            .with_api_token(self.api)
    }
}

/// GET /download/{id}/{file}
/// Returns the attachment bytes with their stored content type
pub async fn download(
    State(state): State<AppState>,
    Path((id, file)): Path<(String, String)>,
    Query(params): Query<DownloadParams>,
) -> Result<Response, ApiError> {
    let request = params.into_request(id, file);
    let attachment = state.content.get_attachment(&request).await?;

    let content_type = HeaderValue::from_str(&attachment.content_type)
        .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, content_type)],
        attachment.data.clone(),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_map_onto_request() {
        let params = DownloadParams {
            version: "3".to_string(),
            modification_date: "1700000000000".to_string(),
            api: "v2".to_string(),
        };

        let request = params.into_request("12345".to_string(), "diagram.png".to_string());

        assert_eq!(request.content_id, "12345");
        assert_eq!(request.filename, "diagram.png");
        assert_eq!(request.version, "3");
        assert_eq!(request.modification_date, "1700000000000");
        assert_eq!(request.api_token, "v2");
    }

    #[test]
    fn test_missing_params_stay_unset() {
        let request =
            DownloadParams::default().into_request("1".to_string(), "a.txt".to_string());

        assert!(request.version.is_empty());
        assert!(request.modification_date.is_empty());
        assert!(request.api_token.is_empty());
    }
}
