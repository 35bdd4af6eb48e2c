//! Network layer: proxied client construction and Tor connectivity check
//!
//! The crawler itself never builds a client; it receives one from here,
//! already configured to route every request through the SOCKS5 proxy
//! into the anonymizing network.

use crate::config::{CrawlerConfig, ProxyConfig};
use crate::{Result, ScoutError};
use reqwest::{redirect::Policy, Client, Proxy};
use scraper::{Html, Selector};
use std::net::Ipv4Addr;
use std::time::Duration;

/// Address used to confirm the fetch path actually goes through Tor
pub const TOR_CHECK_URL: &str = "https://check.torproject.org/";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client every fetch goes through
///
/// The proxy URL uses `socks5h` so hostname resolution happens inside the
/// overlay network. Timeout and redirect-following come from the run
/// configuration and apply to every request made with this client.
pub fn build_proxied_client(proxy: &ProxyConfig, crawler: &CrawlerConfig) -> Result<Client> {
    let redirect = if crawler.follow_redirects {
        Policy::limited(10)
    } else {
        Policy::none()
    };

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .proxy(Proxy::all(proxy.socks_url())?)
        .timeout(Duration::from_secs(crawler.timeout_secs))
        .redirect(redirect)
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

/// Result of the Tor connectivity check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TorStatus {
    /// Whether the check page confirmed the connection goes through Tor
    pub connected: bool,
    /// Exit IP address reported by the check page, when present
    pub exit_ip: Option<Ipv4Addr>,
}

/// Confirms the client's traffic routes through Tor
///
/// Fetches the Tor Project's check page and reads its verdict. Failing to
/// reach the page at all usually means the proxy endpoint is wrong.
pub async fn check_tor(client: &Client) -> Result<TorStatus> {
    let response = client.get(TOR_CHECK_URL).send().await.map_err(|e| {
        ScoutError::TorCheck(format!(
            "could not reach {}: {}; check the proxy setting",
            TOR_CHECK_URL, e
        ))
    })?;
    let body = response
        .text()
        .await
        .map_err(|e| ScoutError::TorCheck(e.to_string()))?;

    Ok(parse_check_page(&body))
}

/// Reads the check page's verdict and exit IP out of its markup
fn parse_check_page(body: &str) -> TorStatus {
    let html = Html::parse_document(body);

    let connected = Selector::parse("div.content h1")
        .ok()
        .and_then(|selector| {
            html.select(&selector)
                .next()
                .map(|h1| h1.text().collect::<String>().contains("Congratulations"))
        })
        .unwrap_or(false);

    let exit_ip = Selector::parse("div.content p").ok().and_then(|selector| {
        html.select(&selector)
            .map(|p| p.text().collect::<String>())
            .find(|text| text.contains("Your IP address"))
            .and_then(|text| extract_ipv4(&text))
    });

    TorStatus { connected, exit_ip }
}

/// Picks the first IPv4-looking token out of a sentence
fn extract_ipv4(text: &str) -> Option<Ipv4Addr> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_ascii_digit() && c != '.'))
        .find_map(|token| token.parse().ok())
}
