//! Integration tests for the traversal engine
//!
//! These tests use wiremock to stand in for hidden services and exercise
//! the full per-URL step: robots fetch, page fetch, extraction, and
//! frontier production. Off-network links (everything the mock server
//! serves resolves to a non-onion host) are rejected by the link filter,
//! so frontier growth beyond the seed is covered by unit tests on the
//! pure extraction path.

use onionscout::config::Config;
use onionscout::crawler::{CancelFlag, Coordinator, NullObserver};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration rooted at the mock server
fn test_config(seed: &str) -> Config {
    let mut config = Config::new(seed);
    config.crawler.delay_secs = 0;
    config
}

fn coordinator(config: Config) -> Coordinator {
    Coordinator::new(
        config,
        reqwest::Client::new(),
        Box::new(NullObserver),
        CancelFlag::new(),
    )
}

async fn mount_robots(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_single_page_crawl_extracts_site() {
    let server = MockServer::start().await;
    mount_robots(&server, "User-agent: *\nAllow: /\n").await;

    let body = r#"<html>
        <head>
            <title>  Example   Service </title>
            <meta name="description" content="a  small   directory">
        </head>
        <body>
            w1 w2 w3 w4 w5 w6 w7 w8 w9 w10 w11 w12 w13 w14 w15 w16 w17 w18 w19 w20
            <a href="/about">About</a>
            <a href="https://example.com/">Clearnet</a>
        </body>
    </html>"#;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let seed = format!("{}/", server.uri());
    let mut config = test_config(&seed);
    config.crawler.max_content_words = 5;

    let outcome = coordinator(config).run().await;

    assert!(!outcome.cancelled);
    assert_eq!(outcome.sites.len(), 1);

    let site = &outcome.sites[0];
    assert_eq!(site.url, seed);
    assert_eq!(site.title, "Example Service");
    assert_eq!(site.description, "a small directory");
    assert_eq!(site.content.split_whitespace().count(), 5);
    assert!(site.content.starts_with("w1 w2"));
}

#[tokio::test]
async fn test_robots_fetched_once_for_fresh_host() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\n"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><head><title>T</title></head><body>x</body></html>"),
        )
        .mount(&server)
        .await;

    let seed = format!("{}/", server.uri());
    let outcome = coordinator(test_config(&seed)).run().await;

    assert_eq!(outcome.sites.len(), 1);
    // MockServer verifies the expect(1) on drop.
}

#[tokio::test]
async fn test_rejected_status_produces_no_site() {
    let server = MockServer::start().await;
    mount_robots(&server, "").await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
        .mount(&server)
        .await;

    let seed = format!("{}/", server.uri());
    let outcome = coordinator(test_config(&seed)).run().await;

    assert!(outcome.sites.is_empty());
    assert_eq!(outcome.levels_completed, 1);
    assert!(!outcome.cancelled);
}

#[tokio::test]
async fn test_server_error_produces_no_site() {
    let server = MockServer::start().await;
    mount_robots(&server, "").await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let seed = format!("{}/", server.uri());
    let outcome = coordinator(test_config(&seed)).run().await;

    assert!(outcome.sites.is_empty());
}

#[tokio::test]
async fn test_meta_refresh_page_produces_no_site() {
    let server = MockServer::start().await;
    mount_robots(&server, "").await;

    let body = r#"<html><head>
        <meta http-equiv="Refresh" content="0; url=http://moved.onion/">
    </head><body>moved</body></html>"#;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let seed = format!("{}/", server.uri());
    let mut config = test_config(&seed);
    // Depth 1 so the (unreachable) redirect target is never attempted.
    config.crawler.max_depth = 1;

    let outcome = coordinator(config).run().await;

    assert!(outcome.sites.is_empty());
    assert_eq!(outcome.levels_completed, 1);
}

#[tokio::test]
async fn test_top_page_filter_skips_deep_seed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(0)
        .mount(&server)
        .await;

    let seed = format!("{}/deep/page", server.uri());
    let mut config = test_config(&seed);
    config.crawler.only_top_page = true;

    let outcome = coordinator(config).run().await;

    assert!(outcome.sites.is_empty());
    // The URL was filtered before any network activity.
}

#[tokio::test]
async fn test_precancelled_run_does_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(0)
        .mount(&server)
        .await;

    let cancel = CancelFlag::new();
    cancel.cancel();

    let seed = format!("{}/", server.uri());
    let coordinator = Coordinator::new(
        test_config(&seed),
        reqwest::Client::new(),
        Box::new(NullObserver),
        cancel,
    );
    let outcome = coordinator.run().await;

    assert!(outcome.cancelled);
    assert!(outcome.sites.is_empty());
    assert_eq!(outcome.levels_completed, 0);
}

#[tokio::test]
async fn test_levels_bounded_by_depth() {
    let server = MockServer::start().await;
    mount_robots(&server, "").await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><head><title>T</title></head><body>leaf</body></html>"),
        )
        .mount(&server)
        .await;

    let seed = format!("{}/", server.uri());
    let mut config = test_config(&seed);
    config.crawler.max_depth = 5;

    let outcome = coordinator(config).run().await;

    // The seed has no onion links, so the frontier drains after one level.
    assert_eq!(outcome.sites.len(), 1);
    assert_eq!(outcome.levels_completed, 1);
    assert!(outcome.levels_completed <= 5);
}

#[tokio::test]
async fn test_unreachable_onion_links_are_skipped_not_fatal() {
    let server = MockServer::start().await;
    mount_robots(&server, "").await;

    // The seed links to an onion address that cannot resolve without the
    // overlay network; the second level must skip it and finish cleanly.
    let body = r#"<html><head><title>T</title></head><body>
        <a href="http://expiredlinkzgvmvzcfyudmbwzw4lu2zwpyeada6n6qogvcvrtbj6vfnad.onion/">dead</a>
    </body></html>"#;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let seed = format!("{}/", server.uri());
    let outcome = coordinator(test_config(&seed)).run().await;

    assert_eq!(outcome.sites.len(), 1);
    assert_eq!(outcome.levels_completed, 2);
    assert!(!outcome.cancelled);
}
