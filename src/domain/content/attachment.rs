use bytes::Bytes;

/// Content type reported when the remote omits one
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A binary file attached to a content item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub data: Bytes,
    pub content_type: String,
}

impl Attachment {
    pub fn new(data: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            content_type: content_type.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Everything the download endpoint needs to return the exact bytes of one attachment version
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttachmentRequest {
    /// Id of the owning content item
    pub content_id: String,
    pub filename: String,
    pub version: String,
    pub modification_date: String,
    /// Opaque access token issued by the wiki in download links
    pub api_token: String,
}

impl AttachmentRequest {
    pub fn new(content_id: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            content_id: content_id.into(),
            filename: filename.into(),
            ..Default::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_modification_date(mut self, date: impl Into<String>) -> Self {
        self.modification_date = date.into();
        self
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = token.into();
        self
    }
}
