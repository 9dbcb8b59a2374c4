/// Normalizes a hyperlink reference found on a page of `protocol://domain`
///
/// # Normalization Steps
///
/// 1. Protocol-relative references (`//host/path`) get the seed protocol
/// 2. Root-relative references (`/path`) get the seed protocol and domain
/// 3. Everything else passes through untouched; relative paths without a
///    leading slash are not resolved against the current page
/// 4. The fragment (everything from the first `#`) is dropped
/// 5. Trailing slashes of the path are dropped, so `/b`, `/b/` and `/b#top`
///    all collapse to one entry
///
/// Fragment-only references (`#section`) are expected to have been filtered
/// out by the caller. There is no error case: any input yields a
/// deterministic string, even if it is not a usable URL.
///
/// # Examples
///
/// ```
/// use simple_crawler::url::normalize;
///
/// assert_eq!(normalize("/b", "http", "example.com"), "http://example.com/b");
/// assert_eq!(normalize("//cdn.example.com/x/", "https", "example.com"), "https://cdn.example.com/x");
/// assert_eq!(normalize("http://other.com/page#top", "http", "example.com"), "http://other.com/page");
/// ```
pub fn normalize(reference: &str, protocol: &str, domain: &str) -> String {
    let absolute = if reference.starts_with("//") {
        format!("{}:{}", protocol, reference)
    } else if reference.starts_with('/') {
        format!("{}://{}{}", protocol, domain, reference)
    } else {
        reference.to_string()
    };

    truncate(&absolute)
}

/// Drops the fragment and any trailing path slashes
///
/// This intentionally does not cut at the last `/` or `#`: doing so would map
/// `http://example.com/b` to `http://example.com/` and make normalization
/// non-idempotent. The `scheme://` separator is never touched.
fn truncate(url: &str) -> String {
    let without_fragment = match url.find('#') {
        Some(pos) => &url[..pos],
        None => url,
    };

    let path_start = without_fragment
        .find("://")
        .map(|pos| pos + 3)
        .unwrap_or(0);
    let (head, rest) = without_fragment.split_at(path_start);

    format!("{}{}", head, rest.trim_end_matches('/'))
}
