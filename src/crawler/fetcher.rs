//! Single-shot page fetching
//!
//! One GET per URL per run, through the caller-supplied proxied client.
//! Timeout and redirect policy are client-level settings fixed when the
//! client is built.

use reqwest::Client;

/// Response status codes the crawler accepts
///
/// Anything else is treated the same as a transport failure: the URL is
/// skipped without retry.
pub const ACCEPTED_STATUS: [u16; 3] = [200, 301, 302];

/// Result of a single fetch attempt
#[derive(Debug)]
pub enum FetchOutcome {
    /// Accepted response with its body text
    Success { status: u16, body: String },

    /// Response arrived but its status is outside the accepted set
    RejectedStatus { status: u16 },

    /// Connection, proxy, or timeout failure
    TransportError { error: String },
}

/// Issues one bounded GET for a page
///
/// Failures are data, not errors; the traversal skips the URL and moves
/// on either way.
pub async fn fetch_page(client: &Client, url: &str) -> FetchOutcome {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            if !ACCEPTED_STATUS.contains(&status) {
                return FetchOutcome::RejectedStatus { status };
            }

            match response.text().await {
                Ok(body) => FetchOutcome::Success { status, body },
                Err(e) => FetchOutcome::TransportError {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => FetchOutcome::TransportError {
            error: e.to_string(),
        },
    }
}
