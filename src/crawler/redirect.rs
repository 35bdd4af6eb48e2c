//! Meta-refresh redirect detection
//!
//! Pages of the form `<meta http-equiv="Refresh" content="0; url=...">`
//! are redirectors, not content: when one is detected the page contributes
//! only the target to the next frontier level and no site record.

use crate::crawler::document::Document;

/// Extracts a meta-refresh redirect target from a document
///
/// The meta element's `http-equiv` is matched case-insensitively; its
/// `content` attribute is scanned for a `url=` marker. The remainder,
/// trimmed of whitespace and surrounding quotes, is returned only when it
/// carries the onion suffix; clearnet targets are ignored.
pub fn detect_meta_refresh(document: &Document) -> Option<String> {
    let content = document.meta_http_equiv("refresh")?;

    let lowered = content.to_ascii_lowercase();
    let marker = lowered.find("url=")?;
    let target = content[marker + 4..]
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string();

    if target.contains(".onion") {
        Some(target)
    } else {
        None
    }
}
