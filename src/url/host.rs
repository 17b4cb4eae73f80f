use url::Url;

/// Extracts the hostname from a URL
///
/// Retrieves the host portion of a URL in lowercase. Returns None for URLs
/// without a host, which should not occur for valid HTTP(S) URLs.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use linkatlas::url::extract_host;
///
/// let url = Url::parse("https://Example.COM/path").unwrap();
/// assert_eq!(extract_host(&url), Some("example.com".to_string()));
/// ```
pub fn extract_host(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Checks whether a URL is internal to the crawl
///
/// A link is internal iff its resolved hostname string equals the seed
/// URL's hostname exactly. No subdomain folding is performed: a link to
/// `blog.example.com` is external when the seed host is `example.com`.
/// Ports and schemes are not compared.
///
/// # Arguments
///
/// * `url` - The candidate link (already resolved to an absolute URL)
/// * `root_host` - The seed URL's lowercase hostname
pub fn is_internal(url: &Url, root_host: &str) -> bool {
    match extract_host(url) {
        Some(host) => host == root_host,
        None => false,
    }
}
