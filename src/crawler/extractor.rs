//! HTML content extraction
//!
//! This module pulls two things out of a fetched page:
//! - Outbound link references (the `href` of every `<a>`), in document order
//! - Visible text nodes (not inside `<script>` or `<style>`), in document order
//!
//! Parsing is forgiving: html5ever recovers from malformed markup, so a
//! broken page yields partial results instead of an error.

use scraper::{Html, Node, Selector};

/// Elements whose text content is never visible
const INVISIBLE_ELEMENTS: &[&str] = &["script", "style"];

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Raw link references, not yet normalized
    pub links: Vec<String>,

    /// Visible text nodes, untrimmed
    pub text_nodes: Vec<String>,
}

/// Parses HTML content and extracts links and visible text
///
/// # Link Extraction Rules
///
/// - Only `<a href="...">` is considered
/// - Anchors without an `href`, or with an empty one, are skipped
/// - Fragment-only references (`#section`) are skipped
///
/// # Example
///
/// ```
/// use simple_crawler::crawler::extract;
///
/// let html = r##"<html><body><a href="/page">Link</a><a href="#top">Top</a></body></html>"##;
/// let page = extract(html);
/// assert_eq!(page.links, vec!["/page".to_string()]);
/// assert_eq!(page.text_nodes, vec!["Link".to_string(), "Top".to_string()]);
/// ```
pub fn extract(html: &str) -> ExtractedPage {
    let document = Html::parse_document(html);

    ExtractedPage {
        links: extract_links(&document),
        text_nodes: extract_text_nodes(&document),
    }
}

fn extract_links(document: &Html) -> Vec<String> {
    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&anchor_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| !href.is_empty() && !href.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn extract_text_nodes(document: &Html) -> Vec<String> {
    document
        .tree
        .root()
        .descendants()
        .filter_map(|node| {
            let Node::Text(text) = node.value() else {
                return None;
            };

            if text.trim().is_empty() {
                return None;
            }

            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| INVISIBLE_ELEMENTS.contains(&el.name()))
            });

            (!hidden).then(|| text.to_string())
        })
        .collect()
}
