use crate::config::types::Config;
use crate::url::{is_absolute_url, is_http_scheme, is_onion_address};
use crate::ConfigError;

/// Validates a run configuration before any fetch is attempted
///
/// A bad seed is the one fatal input this tool has: everything downstream
/// degrades gracefully, but a seed that is not an absolute http(s) onion
/// URL would make the whole run meaningless.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if !is_absolute_url(&config.seed) {
        return Err(ConfigError::InvalidSeed(format!(
            "not an absolute URL: {}",
            config.seed
        )));
    }
    if !is_http_scheme(&config.seed) {
        return Err(ConfigError::InvalidSeed(format!(
            "not an http(s) URL: {}",
            config.seed
        )));
    }
    if !is_onion_address(&config.seed) {
        return Err(ConfigError::InvalidSeed(format!(
            "not an onion address: {}",
            config.seed
        )));
    }

    if config.crawler.max_depth == 0 {
        return Err(ConfigError::Validation(
            "max-depth must be at least 1".to_string(),
        ));
    }
    if config.crawler.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout-secs must be at least 1".to_string(),
        ));
    }
    if config.crawler.max_content_words < -1 {
        return Err(ConfigError::Validation(
            "max-content-words must be -1 (unlimited) or non-negative".to_string(),
        ));
    }

    if config.proxy.host.is_empty() {
        return Err(ConfigError::Validation(
            "proxy host must not be empty".to_string(),
        ));
    }

    match config.output.path.extension().and_then(|e| e.to_str()) {
        Some("json") => {}
        _ => {
            return Err(ConfigError::Validation(format!(
                "unsupported output format: {}",
                config.output.path.display()
            )));
        }
    }

    Ok(())
}
