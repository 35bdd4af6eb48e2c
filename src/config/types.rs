use serde::Deserialize;
use std::path::PathBuf;

/// Run configuration, immutable once the traversal starts
#[derive(Debug, Clone)]
pub struct Config {
    /// Seed URL the traversal is rooted at
    pub seed: String,
    pub proxy: ProxyConfig,
    pub crawler: CrawlerConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Builds a configuration with default settings for the given seed
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            proxy: ProxyConfig::default(),
            crawler: CrawlerConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// SOCKS5 proxy endpoint into the anonymizing network
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9050,
        }
    }
}

impl ProxyConfig {
    /// Parses a `host:port` endpoint string
    pub fn parse(endpoint: &str) -> Option<Self> {
        let (host, port) = endpoint.split_once(':')?;
        if host.is_empty() {
            return None;
        }
        let port = port.parse().ok()?;
        Some(Self {
            host: host.to_string(),
            port,
        })
    }

    /// The proxy URL handed to the HTTP client
    ///
    /// `socks5h` so hostname resolution happens inside the overlay
    /// network; onion addresses do not resolve anywhere else.
    pub fn socks_url(&self) -> String {
        format!("socks5h://{}:{}", self.host, self.port)
    }
}

/// Traversal behavior settings
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// Maximum number of BFS levels from the seed
    pub max_depth: u32,

    /// Politeness pause between consecutive fetches, in seconds
    pub delay_secs: u64,

    /// Per-request timeout, in seconds
    pub timeout_secs: u64,

    /// Word budget for extracted body text; -1 means unlimited
    pub max_content_words: i64,

    /// Visit only service top pages
    pub only_top_page: bool,

    /// Let the HTTP client follow response redirects
    pub follow_redirects: bool,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            delay_secs: 2,
            timeout_secs: 60,
            max_content_words: 100,
            only_top_page: false,
            follow_redirects: false,
        }
    }
}

/// Result persistence settings
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Destination file, overwritten each run
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("onions.json"),
        }
    }
}

/// Optional TOML config file contents
///
/// Every field is optional; anything absent keeps its default or CLI
/// value.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub crawler: CrawlerOverrides,
    #[serde(default)]
    pub proxy: ProxyOverrides,
    #[serde(default)]
    pub output: OutputOverrides,
}

#[derive(Debug, Default, Deserialize)]
pub struct CrawlerOverrides {
    #[serde(rename = "max-depth")]
    pub max_depth: Option<u32>,

    #[serde(rename = "delay-secs")]
    pub delay_secs: Option<u64>,

    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,

    #[serde(rename = "max-content-words")]
    pub max_content_words: Option<i64>,

    #[serde(rename = "only-top-page")]
    pub only_top_page: Option<bool>,

    #[serde(rename = "follow-redirects")]
    pub follow_redirects: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProxyOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputOverrides {
    pub path: Option<PathBuf>,
}
