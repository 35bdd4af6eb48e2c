//! Literal robots.txt directive scanning
//!
//! Only `Allow: ` and `Disallow: ` lines are honored, and only when their
//! value carries no wildcard. This is a deliberate simplification: the
//! crawler matches exact URLs against these sets rather than implementing
//! prefix or wildcard expansion.

use std::collections::HashSet;

/// Per-host allow/deny URL sets derived from robots.txt
///
/// Both sets hold absolute URLs (the host's base joined with the directive
/// path). An absent `RobotsDirectives` means no policy was fetched, which
/// is not the same as an empty policy.
#[derive(Debug, Clone, Default)]
pub struct RobotsDirectives {
    pub allowed: HashSet<String>,
    pub disallowed: HashSet<String>,
}

/// Scans robots.txt content into allow/deny URL sets
///
/// Each line is matched against the two literal prefixes. Values that
/// contain `*` are dropped from both sets entirely rather than expanded.
///
/// # Arguments
///
/// * `base` - The host's base URL (`scheme://authority`), prepended to
///   every accepted directive value
/// * `body` - Raw robots.txt content
pub fn parse_directives(base: &str, body: &str) -> RobotsDirectives {
    let mut directives = RobotsDirectives::default();

    for line in body.lines() {
        if let Some(value) = line.strip_prefix("Allow: ") {
            if !value.contains('*') {
                directives.allowed.insert(format!("{}{}", base, value));
            }
        } else if let Some(value) = line.strip_prefix("Disallow: ") {
            if !value.contains('*') {
                directives.disallowed.insert(format!("{}{}", base, value));
            }
        }
    }

    directives
}
