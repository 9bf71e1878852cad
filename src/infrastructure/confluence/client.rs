use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use super::http_client::{BasicAuth, HttpClient, HttpClientTrait, HttpResponse};
use super::payload::{decode, ContentListPayload, ContentPayload, SpaceListPayload};
use crate::config::ConfluenceConfig;
use crate::domain::content::{
    display_title, Attachment, AttachmentRequest, ContentSource, Page, Space,
    DEFAULT_CONTENT_TYPE,
};
use crate::domain::DomainError;

const JSON_ACCEPT: &str = "application/json, */*";
const ANY_ACCEPT: &str = "*/*";
const REST_API_SEGMENTS: [&str; 3] = ["wiki", "rest", "api"];
const DOWNLOAD_SEGMENTS: [&str; 3] = ["wiki", "download", "attachments"];

/// Client for the Confluence REST API
///
/// Holds nothing but the base URL, the credentials and the transport, so a
/// single instance can serve any number of concurrent callers.
#[derive(Debug)]
pub struct ConfluenceClient<C: HttpClientTrait> {
    client: C,
    base_url: Url,
    auth: BasicAuth,
}

impl ConfluenceClient<HttpClient> {
    /// Builds a client backed by reqwest from validated configuration
    pub fn from_config(config: &ConfluenceConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let client = HttpClient::with_timeout(config.timeout())?;
        Self::new(
            client,
            &config.base_url,
            BasicAuth::new(&config.username, &config.password),
        )
    }
}

impl<C: HttpClientTrait> ConfluenceClient<C> {
    pub fn new(client: C, base_url: &str, auth: BasicAuth) -> Result<Self, DomainError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            DomainError::configuration(format!("Invalid base URL '{}': {}", base_url, e))
        })?;

        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(DomainError::configuration(format!(
                "Base URL '{}' must be an http(s) URL",
                base_url
            )));
        }

        Ok(Self {
            client,
            base_url,
            auth,
        })
    }

    /// The underlying transport
    #[cfg(test)]
    pub fn http_client(&self) -> &C {
        &self.client
    }

    fn endpoint(&self, prefix: &[&str], path: &[&str]) -> Result<String, DomainError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| {
                DomainError::configuration(format!("Base URL '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(prefix)
            .extend(path);

        Ok(url.into())
    }

    fn api_url(&self, path: &[&str]) -> Result<String, DomainError> {
        self.endpoint(&REST_API_SEGMENTS, path)
    }

    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<HttpResponse, DomainError> {
        debug!(url = %url, "Requesting remote content");

        self.client
            .get_bytes(url, query, vec![("Accept", JSON_ACCEPT)], &self.auth)
            .await
    }
}

#[async_trait]
impl<C: HttpClientTrait> ContentSource for ConfluenceClient<C> {
    async fn fetch_spaces(&self) -> Result<Vec<Space>, DomainError> {
        let url = self.api_url(&["space"])?;
        let response = self
            .get_json(&url, &[("expand", "description.view")])
            .await?;

        if response.is_blank() {
            return Err(DomainError::empty_response("Space listing returned no data"));
        }

        let payload: SpaceListPayload = decode(&response.body, "space listing")?;

        Ok(payload.results.into_iter().map(Space::from).collect())
    }

    async fn fetch_page_by_title(
        &self,
        space_key: &str,
        title: &str,
    ) -> Result<Page, DomainError> {
        let url = self.api_url(&["content"])?;
        let title = display_title(title);
        let response = self
            .get_json(
                &url,
                &[
                    ("title", title.as_str()),
                    ("type", "page"),
                    ("spaceKey", space_key),
                    ("expand", "body.view"),
                ],
            )
            .await?;

        if response.is_blank() {
            return Err(DomainError::empty_response(format!(
                "Content search for '{}' returned no data",
                title
            )));
        }

        let payload: ContentListPayload = decode(&response.body, "content listing")?;
        let base = payload.base_link().map(str::to_string);

        let content = payload.results.into_iter().next().ok_or_else(|| {
            DomainError::not_found(format!(
                "Page '{}' not found in space '{}'",
                title, space_key
            ))
        })?;

        content.into_page(base.as_deref())
    }

    async fn fetch_page_by_id(&self, space_key: &str, id: &str) -> Result<Page, DomainError> {
        let url = self.api_url(&["content", id])?;
        let response = self
            .get_json(
                &url,
                &[("type", "page"), ("spaceKey", space_key), ("expand", "body.view")],
            )
            .await?;

        if response.is_blank() {
            return Err(DomainError::not_found(format!(
                "Page '{}' not found in space '{}'",
                id, space_key
            )));
        }

        let payload: ContentPayload = decode(&response.body, "content")?;
        payload.into_page(None)
    }

    async fn fetch_attachment(
        &self,
        request: &AttachmentRequest,
    ) -> Result<Attachment, DomainError> {
        let url = self.endpoint(
            &DOWNLOAD_SEGMENTS,
            &[request.content_id.as_str(), request.filename.as_str()],
        )?;

        debug!(url = %url, "Downloading attachment");

        let response = self
            .client
            .get_bytes(
                &url,
                &[
                    ("version", request.version.as_str()),
                    ("modificationDate", request.modification_date.as_str()),
                    ("api", request.api_token.as_str()),
                ],
                vec![("Accept", ANY_ACCEPT)],
                &self.auth,
            )
            .await?;

        if response.body.is_empty() {
            return Err(DomainError::not_found(format!(
                "Attachment '{}' of content '{}' is empty",
                request.filename, request.content_id
            )));
        }

        let content_type = response
            .content_type
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

        Ok(Attachment::new(response.body, content_type))
    }
}
