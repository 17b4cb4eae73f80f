//! HTML parser for extracting internal links
//!
//! This module parses fetched HTML and turns anchor hrefs into the set of
//! normalized internal URLs to consider for crawling.

use crate::url::{is_internal, normalize_url};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts all internal links from an HTML document
///
/// Collects every `<a href="...">`, resolves each href against `page_url`,
/// keeps only links whose hostname equals `root_host`, normalizes them, and
/// deduplicates within the page via the returned set. Order is irrelevant.
///
/// Malformed hrefs are silently dropped; a single bad link never aborts
/// extraction for the rest of the page.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `page_url` - The page's own URL, for resolving relative links
/// * `root_host` - The crawl's root hostname (lowercase)
///
/// # Example
///
/// ```
/// use linkatlas::crawler::extract_links;
/// use url::Url;
///
/// let html = r#"<a href="/about">About</a> <a href="https://other.com/">Out</a>"#;
/// let page_url = Url::parse("https://example.com/").unwrap();
/// let links = extract_links(html, &page_url, "example.com");
/// assert_eq!(links.len(), 1);
/// ```
pub fn extract_links(html: &str, page_url: &Url, root_host: &str) -> HashSet<Url> {
    let document = Html::parse_document(html);
    let mut links = HashSet::new();

    let selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(e) => {
            // Static selector; this cannot fail in practice
            tracing::warn!("anchor selector failed to parse: {}", e);
            return links;
        }
    };

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let Some(resolved) = resolve_href(href, page_url) else {
            continue;
        };

        if !is_internal(&resolved, root_host) {
            continue;
        }

        if let Ok(normalized) = normalize_url(resolved.as_str()) {
            links.insert(normalized);
        }
    }

    links
}

/// Resolves an href to an absolute URL, filtering non-navigable links
///
/// Returns None for:
/// - empty and fragment-only hrefs (same-page anchors)
/// - javascript:, mailto:, tel:, data: schemes
/// - hrefs that fail to resolve against the page URL
/// - non-HTTP(S) URLs after resolution
fn resolve_href(href: &str, page_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    match page_url.join(href) {
        Ok(absolute) if absolute.scheme() == "http" || absolute.scheme() == "https" => {
            Some(absolute)
        }
        _ => None,
    }
}
