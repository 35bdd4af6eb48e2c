//! Crawler module: the traversal engine
//!
//! Everything with nontrivial state or edge-case policy lives here: the
//! breadth-first orchestrator, the single-shot fetcher, the document
//! interface, content extraction, redirect detection, and candidate link
//! selection.

mod cancel;
mod coordinator;
mod document;
mod extractor;
mod fetcher;
mod links;
mod observer;
mod redirect;

pub use cancel::CancelFlag;
pub use coordinator::{Coordinator, CrawlOutcome};
pub use document::Document;
pub use extractor::{extract_page_info, normalize_text, truncate_words, PageInfo};
pub use fetcher::{fetch_page, FetchOutcome, ACCEPTED_STATUS};
pub use links::extract_candidate_links;
pub use observer::{CrawlObserver, NullObserver, SkipReason, TracingObserver};
pub use redirect::detect_meta_refresh;

use crate::config::{validate, Config};
use crate::Result;
use reqwest::Client;

/// Runs a complete traversal with the default observer
///
/// Validates the configuration first: a seed that is not an absolute
/// http(s) onion URL is fatal before any fetch is attempted. The returned
/// outcome carries partial results when the run was cancelled.
pub async fn crawl(config: Config, client: Client, cancel: CancelFlag) -> Result<CrawlOutcome> {
    validate(&config)?;
    let coordinator = Coordinator::new(config, client, Box::new(TracingObserver), cancel);
    Ok(coordinator.run().await)
}
