//! Page content extraction
//!
//! Pulls title, description, and a word-budgeted slice of body text out of
//! a fetched document. Missing pieces degrade to fallbacks rather than
//! failing the page.

use crate::crawler::document::Document;
use crate::url::host_of;

/// Extracted page fields, pre-truncation applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub title: String,
    pub description: String,
    pub content: String,
}

/// Extracts title, description, and truncated body text from a page
///
/// - title falls back to the URL's hostname when the document has none
/// - description is empty when the meta element or its attribute is absent
/// - content is empty when the body element is absent; otherwise it is
///   normalized and cut to the first `max_words` whitespace-separated
///   tokens (`max_words < 0` means unlimited)
pub fn extract_page_info(document: &Document, url: &str, max_words: i64) -> PageInfo {
    let title = match document.title() {
        Some(text) => normalize_text(&text),
        None => host_of(url).unwrap_or_default(),
    };

    let description = document
        .meta_named("description")
        .map(|text| normalize_text(&text))
        .unwrap_or_default();

    let content = match document.body_text() {
        Some(text) => truncate_words(&normalize_text(&text), max_words),
        None => String::new(),
    };

    PageInfo {
        title,
        description,
        content,
    }
}

/// Trims, strips newlines, and collapses runs of spaces to one
pub fn normalize_text(text: &str) -> String {
    let stripped = text.trim().replace('\n', "");

    let mut normalized = String::with_capacity(stripped.len());
    let mut previous_was_space = false;
    for c in stripped.chars() {
        if c == ' ' {
            if !previous_was_space {
                normalized.push(c);
            }
            previous_was_space = true;
        } else {
            normalized.push(c);
            previous_was_space = false;
        }
    }
    normalized
}

/// Cuts text to its first `max_words` whitespace-separated tokens
///
/// A pure prefix-by-word-count operation, never mid-word. Text within the
/// budget is returned unchanged; a negative budget disables truncation.
pub fn truncate_words(text: &str, max_words: i64) -> String {
    if max_words < 0 {
        return text.to_string();
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > max_words as usize {
        words[..max_words as usize].join(" ")
    } else {
        text.to_string()
    }
}
