use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use crate::domain::DomainError;

/// Longest error body quoted in a remote error message
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Basic-auth credentials sent with every request
#[derive(Clone)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Successful response: raw body plus the reported content type
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self {
            content_type: None,
            body: body.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Whether the body carries nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.body.trim_ascii().is_empty()
    }
}

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    /// Issues a GET request and returns the body of a successful response
    ///
    /// A 404 status maps to `NotFound`; transport failures and every other
    /// non-success status map to `Remote`.
    async fn get_bytes(
        &self,
        url: &str,
        query: &[(&str, &str)],
        headers: Vec<(&str, &str)>,
        auth: &BasicAuth,
    ) -> Result<HttpResponse, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Client whose requests fail with a remote error once `timeout` elapses
    pub fn with_timeout(timeout: std::time::Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn get_bytes(
        &self,
        url: &str,
        query: &[(&str, &str)],
        headers: Vec<(&str, &str)>,
        auth: &BasicAuth,
    ) -> Result<HttpResponse, DomainError> {
        let mut request = self
            .client
            .get(url)
            .query(query)
            .basic_auth(&auth.username, Some(&auth.password));

        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::remote(format!("Request failed: {}", e)))?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(DomainError::not_found(format!("Remote returned 404 for {}", url)));
        }

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let error_body: String = error_body.chars().take(MAX_ERROR_BODY_CHARS).collect();

            return Err(DomainError::remote(format!("HTTP {}: {}", status, error_body)));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::remote(format!("Failed to read response body: {}", e)))?;

        Ok(HttpResponse { content_type, body })
    }
}
