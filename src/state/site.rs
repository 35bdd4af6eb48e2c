use serde::{Deserialize, Serialize};

/// A discovered hidden service page
///
/// Created once per successfully extracted page and never mutated
/// afterwards; ownership passes to the registry on insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// Page title, or the hostname when the page has none
    pub title: String,

    /// Meta description, empty when absent
    pub description: String,

    /// Body text, truncated to the configured word budget
    pub content: String,

    /// Exact absolute URL the page was fetched from
    pub url: String,
}

impl Site {
    pub fn new(title: String, description: String, content: String, url: String) -> Self {
        Self {
            title,
            description,
            content,
            url,
        }
    }
}
