//! Configuration module for OnionScout
//!
//! A run's settings come from defaults, then an optional TOML file, then
//! command-line flags, in that precedence order. Validation happens once,
//! before any network activity.

mod parser;
mod types;
mod validation;

pub use parser::{apply_file_config, load_file_config};
pub use types::{
    Config, CrawlerConfig, CrawlerOverrides, FileConfig, OutputConfig, OutputOverrides,
    ProxyConfig, ProxyOverrides,
};
pub use validation::validate;
