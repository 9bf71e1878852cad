use serde::Serialize;

/// Character the wiki uses in place of spaces when it encodes titles in links
pub const TITLE_SEPARATOR: char = '+';

/// Markup that has already been rewritten for local routes and may be rendered as-is
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single content document within a space
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub id: String,
    #[serde(rename = "type")]
    pub page_type: String,
    pub status: String,
    pub title: String,
    pub link: String,
    pub body: String,
    pub body_html: TrustedHtml,
}

/// Replaces spaces with the wiki's title separator
pub fn normalize_title(title: &str) -> String {
    title.replace(' ', &TITLE_SEPARATOR.to_string())
}

/// Inverse of [`normalize_title`], the form the remote search expects
pub fn display_title(title: &str) -> String {
    title.replace(TITLE_SEPARATOR, " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("Getting Started Guide"), "Getting+Started+Guide");
        assert_eq!(normalize_title("Already+Encoded"), "Already+Encoded");
        assert_eq!(normalize_title("Single"), "Single");
    }

    #[test]
    fn test_display_title() {
        assert_eq!(display_title("Getting+Started"), "Getting Started");
        assert_eq!(display_title("Plain Title"), "Plain Title");
    }

    #[test]
    fn test_normalized_title_is_stable_across_forms() {
        assert_eq!(
            normalize_title("Release Notes"),
            normalize_title(&display_title("Release+Notes"))
        );
    }

    #[test]
    fn test_trusted_html_serializes_as_string() {
        let html = TrustedHtml::new("<p>hi</p>");
        assert_eq!(serde_json::to_string(&html).unwrap(), "\"<p>hi</p>\"");
        assert_eq!(html.to_string(), "<p>hi</p>");
    }
}
