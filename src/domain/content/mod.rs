//! Wiki content domain - spaces, pages and attachments served from the remote wiki

mod attachment;
mod page;
mod source;
mod space;

pub use attachment::{Attachment, AttachmentRequest, DEFAULT_CONTENT_TYPE};
pub use page::{display_title, normalize_title, Page, TrustedHtml, TITLE_SEPARATOR};
pub use source::ContentSource;
pub use space::Space;

#[cfg(test)]
pub use source::MockContentSource;
