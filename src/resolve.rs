//! Turning `href`/`src` values into absolute URLs.
//!
//! This is plain string surgery on the page URL, not RFC 3986 resolution:
//! `..` segments, query-only and fragment-only references are not normalized.

/// case-insensitive check for `.mp3` anywhere in a reference
pub fn is_mp3_reference(reference: &str) -> bool {
    reference.to_lowercase().contains(".mp3")
}

/// resolve `reference` found on the page at `page_url`
///
/// - `//host/path` gets an `https:` scheme
/// - `/path` is appended to the scheme and host of `page_url`
/// - anything not starting with `http` replaces the last segment of `page_url`
/// - everything else is returned untouched
pub fn resolve(reference: &str, page_url: &str) -> String {
    if reference.starts_with("//") {
        format!("https:{}", reference)
    } else if reference.starts_with('/') {
        format!("{}{}", origin(page_url), reference)
    } else if !reference.starts_with("http") {
        format!("{}/{}", parent(page_url), reference)
    } else {
        reference.to_string()
    }
}

/// first three `/`-delimited segments, i.e. `scheme://host`
fn origin(page_url: &str) -> String {
    page_url.split('/').take(3).collect::<Vec<_>>().join("/")
}

/// everything before the last `/`; the whole URL when there is none
fn parent(page_url: &str) -> &str {
    page_url
        .rsplit_once('/')
        .map(|(head, _)| head)
        .unwrap_or(page_url)
}
