//! Robots.txt handling module
//!
//! Fetches a host's robots.txt and scans it for literal allow/deny
//! directives. The orchestrator consults this at most once per distinct
//! host per run.

mod parser;

pub use parser::{parse_directives, RobotsDirectives};

use crate::url::origin_of;
use reqwest::Client;
use std::time::Duration;

/// Per-request timeout for robots.txt, tighter than the run timeout so a
/// slow policy file cannot stall the traversal for long.
const ROBOTS_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches and scans robots.txt for the host a URL belongs to
///
/// Any transport failure degrades to `None`: the caller treats the host as
/// having no constraints. The response status is not inspected; whatever
/// body comes back is scanned for directive lines.
pub async fn fetch_directives(client: &Client, url: &str) -> Option<RobotsDirectives> {
    let base = origin_of(url)?;
    let robots_url = format!("{}/robots.txt", base);

    let response = client
        .get(&robots_url)
        .timeout(ROBOTS_TIMEOUT)
        .send()
        .await
        .ok()?;
    let body = response.text().await.ok()?;

    Some(parse_directives(&base, &body))
}
