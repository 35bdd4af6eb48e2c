//! Traversal progress reporting
//!
//! The orchestrator stays silent; anything worth telling the operator goes
//! through this interface at fixed extension points.

use crate::state::Site;
use std::fmt;

/// Why a frontier URL was passed over without contributing anything
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Top-page-only mode and the URL is not a service's top page
    NotTopPage,
    /// The registry already holds this exact URL
    AlreadyRecorded,
    /// Response status outside the accepted set
    RejectedStatus(u16),
    /// Connection, proxy, or timeout failure
    FetchFailed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotTopPage => write!(f, "not a top page"),
            SkipReason::AlreadyRecorded => write!(f, "already recorded"),
            SkipReason::RejectedStatus(status) => write!(f, "rejected status {}", status),
            SkipReason::FetchFailed(error) => write!(f, "fetch failed: {}", error),
        }
    }
}

/// Observer hooks invoked by the orchestrator
///
/// All hooks default to no-ops so implementations only override what they
/// care about.
pub trait CrawlObserver {
    /// A new BFS level is starting with `pending` URLs to process
    fn on_level_start(&self, _level: u32, _pending: usize) {}

    /// A page was extracted and recorded for the first time
    fn on_site_found(&self, _site: &Site) {}

    /// A frontier URL contributed nothing
    fn on_skip(&self, _url: &str, _reason: &SkipReason) {}
}

/// Observer that reports through the tracing subscriber
pub struct TracingObserver;

impl CrawlObserver for TracingObserver {
    fn on_level_start(&self, level: u32, pending: usize) {
        tracing::info!("Level {}: {} URLs to visit", level, pending);
    }

    fn on_site_found(&self, site: &Site) {
        tracing::info!("Site found: {} ({})", site.title, site.url);
    }

    fn on_skip(&self, url: &str, reason: &SkipReason) {
        tracing::debug!("Skipping {}: {}", url, reason);
    }
}

/// Observer that swallows everything, for tests
pub struct NullObserver;

impl CrawlObserver for NullObserver {}
