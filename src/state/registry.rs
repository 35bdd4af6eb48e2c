use crate::state::Site;
use crate::url::host_of;

/// Ordered collection of discovered sites, keyed by exact URL
///
/// Insertion order is discovery order. The registry guarantees that no two
/// entries share an identical URL; deduplication is by exact URL string
/// only, never by content. It lives for one crawl run and is handed to the
/// persistence layer at the end, completed or cancelled alike.
#[derive(Debug, Default)]
pub struct SiteRegistry {
    sites: Vec<Site>,
}

impl SiteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether a URL has already been recorded
    pub fn contains(&self, url: &str) -> bool {
        self.sites.iter().any(|site| site.url == url)
    }

    /// Checks whether any recorded site shares the given hostname
    ///
    /// The orchestrator uses this to fetch a host's robots policy at most
    /// once per run.
    pub fn has_host(&self, hostname: &str) -> bool {
        self.sites
            .iter()
            .any(|site| host_of(&site.url).as_deref() == Some(hostname))
    }

    /// Records a site, preserving discovery order
    ///
    /// Duplicate URLs are rejected: the registry is unchanged and `false`
    /// is returned.
    pub fn add(&mut self, site: Site) -> bool {
        if self.contains(&site.url) {
            return false;
        }
        self.sites.push(site);
        true
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Consumes the registry, yielding sites in discovery order
    pub fn into_sites(self) -> Vec<Site> {
        self.sites
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(url: &str) -> Site {
        Site::new(
            "Title".to_string(),
            String::new(),
            "content".to_string(),
            url.to_string(),
        )
    }

    #[test]
    fn test_add_and_contains() {
        let mut registry = SiteRegistry::new();
        assert!(registry.add(site("http://example.onion/")));
        assert!(registry.contains("http://example.onion/"));
        assert!(!registry.contains("http://example.onion/other"));
    }

    #[test]
    fn test_duplicate_url_rejected() {
        let mut registry = SiteRegistry::new();
        assert!(registry.add(site("http://example.onion/")));
        assert!(!registry.add(site("http://example.onion/")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_discovery_order_preserved() {
        let mut registry = SiteRegistry::new();
        registry.add(site("http://a.onion/"));
        registry.add(site("http://b.onion/"));
        registry.add(site("http://c.onion/"));

        let urls: Vec<&str> = registry.sites().iter().map(|s| s.url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["http://a.onion/", "http://b.onion/", "http://c.onion/"]
        );
    }

    #[test]
    fn test_has_host() {
        let mut registry = SiteRegistry::new();
        registry.add(site("http://example.onion/page"));

        assert!(registry.has_host("example.onion"));
        assert!(!registry.has_host("other.onion"));
    }

    #[test]
    fn test_has_host_across_paths() {
        let mut registry = SiteRegistry::new();
        registry.add(site("http://example.onion/a"));

        // A different path on the same host still counts as known.
        assert!(registry.has_host("example.onion"));
        assert!(!registry.contains("http://example.onion/b"));
    }

    #[test]
    fn test_into_sites_order() {
        let mut registry = SiteRegistry::new();
        registry.add(site("http://a.onion/"));
        registry.add(site("http://b.onion/"));

        let sites = registry.into_sites();
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].url, "http://a.onion/");
    }
}
