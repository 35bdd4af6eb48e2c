//! Narrow document interface over parsed markup
//!
//! Core components query pages exclusively through this type: title text,
//! meta elements by attribute, body text, and anchor targets. Nothing
//! outside this file touches the parser's own API, so any compliant parser
//! could sit behind it.

use scraper::{Html, Selector};

/// A parsed page, queryable through a fixed set of accessors
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses raw page bytes into a queryable document
    ///
    /// Parsing is lenient; malformed markup yields a best-effort tree
    /// rather than an error.
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// The title element's text, if present
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|element| element.text().collect::<String>())
    }

    /// The `content` attribute of a meta element with the given `name`
    pub fn meta_named(&self, name: &str) -> Option<String> {
        let selector = Selector::parse("meta[name]").ok()?;
        self.html
            .select(&selector)
            .find(|element| element.value().attr("name") == Some(name))
            .and_then(|element| element.value().attr("content"))
            .map(|content| content.to_string())
    }

    /// The `content` attribute of a meta element whose `http-equiv`
    /// matches the given value case-insensitively
    pub fn meta_http_equiv(&self, value: &str) -> Option<String> {
        let selector = Selector::parse("meta[http-equiv]").ok()?;
        self.html
            .select(&selector)
            .find(|element| {
                element
                    .value()
                    .attr("http-equiv")
                    .map(|v| v.eq_ignore_ascii_case(value))
                    .unwrap_or(false)
            })
            .and_then(|element| element.value().attr("content"))
            .map(|content| content.to_string())
    }

    /// The body element's full text, if a body is present
    pub fn body_text(&self) -> Option<String> {
        let selector = Selector::parse("body").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|element| element.text().collect::<String>())
    }

    /// Raw anchor targets in document order
    ///
    /// Anchors without an `href` attribute are omitted; no filtering or
    /// resolution happens here.
    pub fn anchor_targets(&self) -> Vec<String> {
        let selector = match Selector::parse("a[href]") {
            Ok(s) => s,
            Err(_) => return Vec::new(),
        };
        self.html
            .select(&selector)
            .filter_map(|element| element.value().attr("href"))
            .map(|href| href.to_string())
            .collect()
    }
}
