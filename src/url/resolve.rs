use crate::url::{is_absolute_url, origin_of};

/// Resolves an anchor's raw target against the page it appeared on
///
/// Absolute targets are returned unchanged. Relative targets are composed
/// as `scheme://authority` of the origin page plus the raw target, with a
/// leading `/` inserted when the target lacks one. This is deliberately
/// plain string composition, not full relative-reference resolution:
/// query-only targets and `..` segments are left to downstream
/// classification to reject.
///
/// Returns `None` only when no origin can be derived from `origin_url`.
///
/// # Examples
///
/// ```
/// use onionscout::url::resolve;
///
/// assert_eq!(
///     resolve("http://example.onion/page", "about"),
///     Some("http://example.onion/about".to_string())
/// );
/// assert_eq!(
///     resolve("http://example.onion/page", "http://other.onion/"),
///     Some("http://other.onion/".to_string())
/// );
/// ```
pub fn resolve(origin_url: &str, raw_target: &str) -> Option<String> {
    if is_absolute_url(raw_target) {
        return Some(raw_target.to_string());
    }

    let origin = origin_of(origin_url)?;
    if raw_target.starts_with('/') {
        Some(format!("{}{}", origin, raw_target))
    } else {
        Some(format!("{}/{}", origin, raw_target))
    }
}
