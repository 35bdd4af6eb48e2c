//! Candidate link extraction
//!
//! Turns a page's anchors into the set of absolute onion URLs eligible for
//! the next frontier level, applying the host's robots directives where
//! they were fetched.

use crate::crawler::document::Document;
use crate::robots::RobotsDirectives;
use crate::url::{is_fragment_link, is_http_scheme, is_onion_address, resolve};
use std::collections::HashSet;

/// Extracts next-level candidate URLs from a page's anchors
///
/// Filtering order per anchor: empty targets, self-references, and raw
/// targets present in the host's disallowed set are rejected before
/// resolution, then fragment links, then anything that resolves to a
/// non-HTTP scheme or off-network address. The host's allowed set is
/// unioned into the result as forced-include candidates regardless of
/// anchor presence.
///
/// `robots` is `None` when no policy was fetched for this page's host;
/// that means no deny filtering and no forced includes.
pub fn extract_candidate_links(
    document: &Document,
    origin_url: &str,
    robots: Option<&RobotsDirectives>,
) -> HashSet<String> {
    let empty = RobotsDirectives::default();
    let directives = robots.unwrap_or(&empty);

    let mut urls = HashSet::new();

    for raw in document.anchor_targets() {
        if raw.is_empty() || raw == origin_url || directives.disallowed.contains(&raw) {
            continue;
        }
        if is_fragment_link(&raw) {
            continue;
        }

        let target = match resolve(origin_url, &raw) {
            Some(t) => t,
            None => continue,
        };

        if !is_http_scheme(&target) {
            continue;
        }
        if !is_onion_address(&target) {
            continue;
        }

        urls.insert(target);
    }

    for allowed in &directives.allowed {
        urls.insert(allowed.clone());
    }

    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "http://x.onion/";

    fn doc_with_anchors(hrefs: &[&str]) -> Document {
        let anchors: String = hrefs
            .iter()
            .map(|href| format!(r#"<a href="{}">link</a>"#, href))
            .collect();
        Document::parse(&format!("<html><body>{}</body></html>", anchors))
    }

    #[test]
    fn test_absolute_onion_links_kept() {
        let doc = doc_with_anchors(&["http://a.onion/", "http://b.onion/page"]);
        let links = extract_candidate_links(&doc, ORIGIN, None);
        assert_eq!(links.len(), 2);
        assert!(links.contains("http://a.onion/"));
        assert!(links.contains("http://b.onion/page"));
    }

    #[test]
    fn test_relative_links_resolved_against_origin() {
        let doc = doc_with_anchors(&["/about", "contact"]);
        let links = extract_candidate_links(&doc, ORIGIN, None);
        assert!(links.contains("http://x.onion/about"));
        assert!(links.contains("http://x.onion/contact"));
    }

    #[test]
    fn test_fragment_links_rejected() {
        let doc = doc_with_anchors(&["#top", "#section-2"]);
        let links = extract_candidate_links(&doc, ORIGIN, None);
        assert!(links.is_empty());
    }

    #[test]
    fn test_self_reference_rejected() {
        let doc = doc_with_anchors(&[ORIGIN]);
        let links = extract_candidate_links(&doc, ORIGIN, None);
        assert!(links.is_empty());
    }

    #[test]
    fn test_clearnet_links_rejected() {
        let doc = doc_with_anchors(&["http://example.com/", "https://onion.example.com/"]);
        let links = extract_candidate_links(&doc, ORIGIN, None);
        assert!(links.is_empty());
    }

    #[test]
    fn test_non_http_schemes_rejected() {
        let doc = doc_with_anchors(&["ftp://files.onion/"]);
        let links = extract_candidate_links(&doc, ORIGIN, None);
        assert!(links.is_empty());
    }

    #[test]
    fn test_robots_scenario() {
        // Disallow: /secret, Allow: /public; candidates /secret, /public,
        // /other as absolute anchors. Expected next frontier: public and
        // other, secret excluded.
        let mut directives = RobotsDirectives::default();
        directives
            .disallowed
            .insert("http://x.onion/secret".to_string());
        directives
            .allowed
            .insert("http://x.onion/public".to_string());

        let doc = doc_with_anchors(&[
            "http://x.onion/secret",
            "http://x.onion/public",
            "http://x.onion/other",
        ]);
        let links = extract_candidate_links(&doc, ORIGIN, Some(&directives));

        assert_eq!(links.len(), 2);
        assert!(links.contains("http://x.onion/public"));
        assert!(links.contains("http://x.onion/other"));
        assert!(!links.contains("http://x.onion/secret"));
    }

    #[test]
    fn test_allowed_set_forced_in_without_anchor() {
        let mut directives = RobotsDirectives::default();
        directives
            .allowed
            .insert("http://x.onion/hidden-index".to_string());

        let doc = doc_with_anchors(&[]);
        let links = extract_candidate_links(&doc, ORIGIN, Some(&directives));

        assert_eq!(links.len(), 1);
        assert!(links.contains("http://x.onion/hidden-index"));
    }

    #[test]
    fn test_duplicate_anchors_deduplicated() {
        let doc = doc_with_anchors(&["http://a.onion/", "http://a.onion/"]);
        let links = extract_candidate_links(&doc, ORIGIN, None);
        assert_eq!(links.len(), 1);
    }
}
