use crate::config::types::{Config, FileConfig};
use crate::ConfigError;
use std::path::Path;

/// Loads the optional TOML config file
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(FileConfig)` - Parsed overrides, any subset of the settings
/// * `Err(ConfigError)` - Failed to read or parse the file
pub fn load_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let file: FileConfig = toml::from_str(&content)?;
    Ok(file)
}

/// Applies file overrides onto a configuration
///
/// Precedence is defaults, then file, then CLI flags; the caller applies
/// CLI flags after this.
pub fn apply_file_config(config: &mut Config, file: FileConfig) {
    if let Some(max_depth) = file.crawler.max_depth {
        config.crawler.max_depth = max_depth;
    }
    if let Some(delay_secs) = file.crawler.delay_secs {
        config.crawler.delay_secs = delay_secs;
    }
    if let Some(timeout_secs) = file.crawler.timeout_secs {
        config.crawler.timeout_secs = timeout_secs;
    }
    if let Some(max_content_words) = file.crawler.max_content_words {
        config.crawler.max_content_words = max_content_words;
    }
    if let Some(only_top_page) = file.crawler.only_top_page {
        config.crawler.only_top_page = only_top_page;
    }
    if let Some(follow_redirects) = file.crawler.follow_redirects {
        config.crawler.follow_redirects = follow_redirects;
    }
    if let Some(host) = file.proxy.host {
        config.proxy.host = host;
    }
    if let Some(port) = file.proxy.port {
        config.proxy.port = port;
    }
    if let Some(path) = file.output.path {
        config.output.path = path;
    }
}
