use url::Url;

/// Top-level label that marks an address as reachable only through the
/// anonymizing overlay network.
const ONION_SUFFIX: &str = "onion";

/// Checks whether a string is a syntactically valid absolute URL
///
/// A URL counts as absolute when it parses under the standard URL grammar
/// and carries an authority. Scheme-only strings such as `mailto:` links
/// parse but have no host, so they classify as false.
///
/// # Examples
///
/// ```
/// use onionscout::url::is_absolute_url;
///
/// assert!(is_absolute_url("http://example.onion/page"));
/// assert!(!is_absolute_url("/page"));
/// assert!(!is_absolute_url("mailto:admin@example.onion"));
/// ```
pub fn is_absolute_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(url) => url.host_str().is_some(),
        Err(_) => false,
    }
}

/// Checks whether a URL points into the anonymizing network
///
/// True when the host's top-level label equals `onion`. Invalid or
/// unparseable URLs classify as false; this never fails.
pub fn is_onion_address(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed
            .host_str()
            .map(|host| host.rsplit('.').next() == Some(ONION_SUFFIX))
            .unwrap_or(false),
        Err(_) => false,
    }
}

/// Checks whether a URL uses an HTTP scheme
///
/// Only `http` and `https` qualify. Anything unparseable classifies as
/// false.
pub fn is_http_scheme(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Checks whether a raw anchor target is an in-page fragment link
pub fn is_fragment_link(raw: &str) -> bool {
    raw.starts_with('#')
}

/// Checks whether a URL denotes a service's top-level page
///
/// The top page is `scheme://authority`, with or without a trailing slash
/// or the default index document name.
///
/// # Examples
///
/// ```
/// use onionscout::url::is_top_page;
///
/// assert!(is_top_page("http://example.onion"));
/// assert!(is_top_page("http://example.onion/"));
/// assert!(is_top_page("http://example.onion/index.html"));
/// assert!(!is_top_page("http://example.onion/about"));
/// ```
pub fn is_top_page(url: &str) -> bool {
    let origin = match origin_of(url) {
        Some(o) => o,
        None => return false,
    };
    url == origin || url == format!("{}/", origin) || url == format!("{}/index.html", origin)
}

/// Extracts the hostname from a URL
///
/// Returns `None` when the URL does not parse or has no host.
pub fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(|h| h.to_string()))
}

/// Extracts `scheme://authority` from a URL, keeping an explicit port
///
/// This is the base every derived address is built from: relative link
/// resolution, robots.txt location, and the top-page check all share it.
pub fn origin_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let mut origin = format!("{}://{}", parsed.scheme(), host);
    if let Some(port) = parsed.port() {
        origin.push(':');
        origin.push_str(&port.to_string());
    }
    Some(origin)
}
