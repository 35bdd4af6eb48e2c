//! OnionScout: bounded reconnaissance of hidden-service link graphs
//!
//! This crate implements a breadth-first crawler rooted at a single onion
//! address, reached through a SOCKS5 proxy into the anonymizing network. It
//! honors literal robots.txt directives, paces itself between fetches, and
//! records every distinct site it discovers exactly once.

pub mod config;
pub mod crawler;
pub mod net;
pub mod output;
pub mod robots;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for OnionScout operations
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Tor connectivity check failed: {0}")]
    TorCheck(String),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Unsupported output format: {0}")]
    UnsupportedOutput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid seed URL: {0}")]
    InvalidSeed(String),
}

/// Result type alias for OnionScout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, Coordinator, CrawlOutcome};
pub use state::{Site, SiteRegistry};
