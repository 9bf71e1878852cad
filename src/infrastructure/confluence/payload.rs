//! Typed shapes of the REST API responses
//!
//! Every field the client relies on is required here, so a response with a
//! missing or mistyped field fails as a whole at decode time.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use super::markup::{homepage_id_from_link, join_link, rewrite_links};
use crate::domain::content::{Page, Space, TrustedHtml};
use crate::domain::DomainError;

/// Decodes a JSON body, reporting any shape mismatch as a malformed response
pub fn decode<T: DeserializeOwned>(body: &[u8], what: &str) -> Result<T, DomainError> {
    serde_json::from_slice(body)
        .map_err(|e| DomainError::malformed_response(format!("Failed to decode {}: {}", what, e)))
}

/// Ids are strings for content but numbers for spaces on some deployments
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

#[derive(Debug, Deserialize)]
pub struct ValuePayload {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct ViewPayload {
    pub view: ValuePayload,
}

/// `GET space?expand=description.view`
#[derive(Debug, Deserialize)]
pub struct SpaceListPayload {
    pub results: Vec<SpacePayload>,
}

#[derive(Debug, Deserialize)]
pub struct SpacePayload {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub space_type: String,
    #[serde(rename = "_links")]
    pub links: SpaceLinksPayload,
    pub description: ViewPayload,
    #[serde(rename = "_expandable")]
    pub expandable: SpaceExpandablePayload,
}

#[derive(Debug, Deserialize)]
pub struct SpaceLinksPayload {
    #[serde(rename = "self")]
    pub self_link: String,
}

#[derive(Debug, Deserialize)]
pub struct SpaceExpandablePayload {
    pub homepage: String,
}

impl From<SpacePayload> for Space {
    fn from(payload: SpacePayload) -> Self {
        Space {
            id: payload.id,
            key: payload.key,
            name: payload.name,
            space_type: payload.space_type,
            link: payload.links.self_link,
            description: payload.description.view.value,
            homepage_id: homepage_id_from_link(&payload.expandable.homepage),
        }
    }
}

/// `GET content?title=...` listing
#[derive(Debug, Deserialize)]
pub struct ContentListPayload {
    pub results: Vec<ContentPayload>,
    #[serde(rename = "_links", default)]
    pub links: Option<EnvelopeLinksPayload>,
}

impl ContentListPayload {
    /// Base link declared on the listing itself
    pub fn base_link(&self) -> Option<&str> {
        self.links.as_ref().and_then(|links| links.base.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct EnvelopeLinksPayload {
    pub base: Option<String>,
}

/// A single content item with `expand=body.view`
#[derive(Debug, Deserialize)]
pub struct ContentPayload {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub status: String,
    pub title: String,
    pub body: ViewPayload,
    #[serde(rename = "_links")]
    pub links: ContentLinksPayload,
}

#[derive(Debug, Deserialize)]
pub struct ContentLinksPayload {
    pub base: Option<String>,
    pub webui: String,
}

impl ContentPayload {
    /// Builds the page, falling back to `envelope_base` when the item has no
    /// base link of its own
    pub fn into_page(self, envelope_base: Option<&str>) -> Result<Page, DomainError> {
        let base = self
            .links
            .base
            .as_deref()
            .or(envelope_base)
            .ok_or_else(|| {
                DomainError::malformed_response(format!(
                    "Content '{}' has no base link",
                    self.id
                ))
            })?;

        let link = join_link(base, &self.links.webui);
        let body = rewrite_links(&self.body.view.value);

        Ok(Page {
            id: self.id,
            page_type: self.content_type,
            status: self.status,
            title: self.title,
            link,
            body_html: TrustedHtml::new(body.clone()),
            body,
        })
    }
}
