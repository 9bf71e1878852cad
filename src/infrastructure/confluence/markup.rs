//! Rewrites of remote URLs into local routes

/// Page links as the wiki renders them
pub const WIKI_DISPLAY_PATH: &str = "/wiki/display/";
/// Local route serving pages
pub const LOCAL_PAGE_PATH: &str = "/page/";
/// Attachment download links as the wiki renders them
pub const WIKI_ATTACHMENT_PATH: &str = "/wiki/download/attachments/";
/// Local route serving attachments
pub const LOCAL_DOWNLOAD_PATH: &str = "/download/";
/// Prefix of the REST link a space uses to reference its homepage
pub const CONTENT_API_PATH: &str = "/rest/api/content/";

/// Points internal page and attachment links of rendered markup at local routes
///
/// Applying it to already rewritten markup changes nothing.
pub fn rewrite_links(body: &str) -> String {
    body.replace(WIKI_DISPLAY_PATH, LOCAL_PAGE_PATH)
        .replace(WIKI_ATTACHMENT_PATH, LOCAL_DOWNLOAD_PATH)
}

/// Joins a base link and a relative web link with exactly one `/`
pub fn join_link(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        return base.to_string();
    }

    format!("{}/{}", base, path)
}

/// Extracts the content id from a homepage link such as `/rest/api/content/100`
///
/// Links without the REST prefix are returned unchanged.
pub fn homepage_id_from_link(link: &str) -> String {
    match link.find(CONTENT_API_PATH) {
        Some(index) => link[index + CONTENT_API_PATH.len()..].to_string(),
        None => link.to_string(),
    }
}
