//! Traversal orchestrator
//!
//! Drives the breadth-first loop over frontier levels: one sequential pass
//! per level, one bounded fetch per URL, a politeness pause between
//! fetches, and a hard stop at the configured depth, on an empty level, or
//! when cancellation is observed.

use crate::config::Config;
use crate::crawler::cancel::CancelFlag;
use crate::crawler::document::Document;
use crate::crawler::extractor::extract_page_info;
use crate::crawler::fetcher::{fetch_page, FetchOutcome};
use crate::crawler::links::extract_candidate_links;
use crate::crawler::observer::{CrawlObserver, SkipReason};
use crate::crawler::redirect::detect_meta_refresh;
use crate::robots::fetch_directives;
use crate::state::{Site, SiteRegistry};
use crate::url::{host_of, is_top_page};
use reqwest::Client;
use std::collections::HashSet;
use std::time::Duration;

/// What a completed or cancelled run hands back to its caller
///
/// The caller decides whether and how to persist; cancellation still
/// yields the partial registry contents.
#[derive(Debug)]
pub struct CrawlOutcome {
    /// Discovered sites in discovery order
    pub sites: Vec<Site>,
    /// Number of BFS levels that were actually processed
    pub levels_completed: u32,
    /// Whether the run stopped on a cancellation request
    pub cancelled: bool,
}

/// What a single frontier URL contributed
enum StepOutcome {
    /// Filtered out before any network activity
    Skipped,
    /// A fetch was attempted; the set holds next-level candidates
    Attempted(HashSet<String>),
}

/// The traversal state machine
///
/// Owns the registry and makes every robots decision itself; components
/// below it are pure or single-shot.
pub struct Coordinator {
    config: Config,
    client: Client,
    registry: SiteRegistry,
    observer: Box<dyn CrawlObserver>,
    cancel: CancelFlag,
}

impl Coordinator {
    pub fn new(
        config: Config,
        client: Client,
        observer: Box<dyn CrawlObserver>,
        cancel: CancelFlag,
    ) -> Self {
        Self {
            config,
            client,
            registry: SiteRegistry::new(),
            observer,
            cancel,
        }
    }

    /// Runs the traversal to completion, depth exhaustion, or cancellation
    pub async fn run(mut self) -> CrawlOutcome {
        let mut frontier: HashSet<String> = HashSet::new();
        frontier.insert(self.config.seed.clone());

        let mut levels_completed = 0;
        let mut cancelled = false;

        for level in 1..=self.config.crawler.max_depth {
            if self.cancel.is_cancelled() {
                cancelled = true;
                break;
            }
            if frontier.is_empty() {
                tracing::info!("Frontier is empty, traversal complete");
                break;
            }

            self.observer.on_level_start(level, frontier.len());
            let (next, level_cancelled) = self.crawl_level(&frontier).await;
            levels_completed += 1;

            if level_cancelled {
                cancelled = true;
                break;
            }
            frontier = next;
        }

        CrawlOutcome {
            sites: self.registry.into_sites(),
            levels_completed,
            cancelled,
        }
    }

    /// Processes one frontier level, producing the next
    ///
    /// Level `n` is fully drained before anything from level `n + 1` is
    /// attempted. Within the level the set's iteration order is
    /// unspecified but sequential.
    async fn crawl_level(&mut self, frontier: &HashSet<String>) -> (HashSet<String>, bool) {
        let mut next = HashSet::new();

        for url in frontier {
            if self.cancel.is_cancelled() {
                return (next, true);
            }

            match self.visit(url).await {
                StepOutcome::Skipped => {}
                StepOutcome::Attempted(links) => {
                    next.extend(links);
                    self.pause().await;
                }
            }
        }

        (next, false)
    }

    /// Per-URL step of the traversal
    ///
    /// Ordering matters: the top-page filter and the registry membership
    /// check run before any network activity, and a host already present
    /// in the registry gets no second robots fetch (its policy is treated
    /// as unknown for this URL).
    async fn visit(&mut self, url: &str) -> StepOutcome {
        if self.config.crawler.only_top_page && !is_top_page(url) {
            self.observer.on_skip(url, &SkipReason::NotTopPage);
            return StepOutcome::Skipped;
        }

        if self.registry.contains(url) {
            self.observer.on_skip(url, &SkipReason::AlreadyRecorded);
            return StepOutcome::Skipped;
        }

        let same_host = host_of(url)
            .map(|host| self.registry.has_host(&host))
            .unwrap_or(false);
        let robots = if same_host {
            None
        } else {
            fetch_directives(&self.client, url).await
        };

        let body = match fetch_page(&self.client, url).await {
            FetchOutcome::Success { body, .. } => body,
            FetchOutcome::RejectedStatus { status } => {
                self.observer.on_skip(url, &SkipReason::RejectedStatus(status));
                return StepOutcome::Attempted(HashSet::new());
            }
            FetchOutcome::TransportError { error } => {
                self.observer.on_skip(url, &SkipReason::FetchFailed(error));
                return StepOutcome::Attempted(HashSet::new());
            }
        };

        let document = Document::parse(&body);

        // A redirector page contributes its target and nothing else.
        if let Some(target) = detect_meta_refresh(&document) {
            tracing::debug!("Meta refresh at {} -> {}", url, target);
            let mut links = HashSet::new();
            links.insert(target);
            return StepOutcome::Attempted(links);
        }

        let info = extract_page_info(&document, url, self.config.crawler.max_content_words);
        let site = Site::new(info.title, info.description, info.content, url.to_string());
        if self.registry.add(site.clone()) {
            self.observer.on_site_found(&site);
        }

        let links = extract_candidate_links(&document, url, robots.as_ref());
        StepOutcome::Attempted(links)
    }

    /// Politeness pause between consecutive fetches
    async fn pause(&self) {
        let delay = self.config.crawler.delay_secs;
        if delay > 0 {
            tokio::time::sleep(Duration::from_secs(delay)).await;
        }
    }
}
