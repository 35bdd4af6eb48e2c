//! OnionScout main entry point
//!
//! Command-line surface for the hidden-service crawler: assembles the run
//! configuration, confirms Tor connectivity, drives the traversal, and
//! persists whatever was found, including on interrupt.

use anyhow::Context;
use clap::Parser;
use onionscout::config::{apply_file_config, load_file_config, validate, Config, ProxyConfig};
use onionscout::crawler::{crawl, CancelFlag};
use onionscout::net::{build_proxied_client, check_tor};
use onionscout::output::save_sites;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Bounded reconnaissance of hidden-service link graphs
///
/// Crawls breadth-first from a seed onion address through a SOCKS5 proxy,
/// honoring literal robots.txt directives and pacing itself between
/// fetches. Results are written as a JSON array, overwritten each run.
#[derive(Parser, Debug)]
#[command(name = "onionscout")]
#[command(version)]
#[command(about = "Bounded reconnaissance of hidden-service link graphs", long_about = None)]
struct Cli {
    /// Seed onion URL the traversal starts from
    #[arg(value_name = "SEED_URL")]
    seed: String,

    /// SOCKS5 proxy endpoint as host:port [default: 127.0.0.1:9050]
    #[arg(short = 'x', long, value_name = "HOST:PORT")]
    proxy: Option<String>,

    /// Path to TOML configuration file; flags override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum traversal depth in levels [default: 2]
    #[arg(short, long)]
    depth: Option<u32>,

    /// Pause between fetches, in seconds [default: 2]
    #[arg(long)]
    delay: Option<u64>,

    /// Request timeout, in seconds [default: 60]
    #[arg(long)]
    timeout: Option<u64>,

    /// Word budget for extracted content, -1 for unlimited [default: 100]
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    max_words: Option<i64>,

    /// Visit only service top pages
    #[arg(long)]
    top: bool,

    /// Follow HTTP response redirects
    #[arg(long)]
    follow_redirects: bool,

    /// Output file, overwritten each run [default: onions.json]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Skip the Tor connectivity check before crawling
    #[arg(long)]
    skip_tor_check: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;
    validate(&config).context("invalid configuration")?;

    let client = build_proxied_client(&config.proxy, &config.crawler)
        .context("failed to build proxied HTTP client")?;

    if cli.skip_tor_check {
        tracing::warn!("Skipping Tor connectivity check");
    } else {
        let status = check_tor(&client).await?;
        if !status.connected {
            anyhow::bail!(
                "traffic is not routed through Tor; check the proxy at {}",
                config.proxy.socks_url()
            );
        }
        match status.exit_ip {
            Some(ip) => tracing::info!("Connected to Tor, exit IP {}", ip),
            None => tracing::info!("Connected to Tor"),
        }
    }

    let cancel = CancelFlag::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("Interrupt received, stopping after the current step");
                cancel.cancel();
            }
        });
    }

    tracing::info!("Start crawling from {}", config.seed);
    let output_path = config.output.path.clone();
    let outcome = crawl(config, client, cancel).await?;

    if outcome.cancelled {
        tracing::warn!("Run cancelled, persisting partial results");
    }
    save_sites(&outcome.sites, &output_path)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    tracing::info!(
        "Recorded {} sites over {} levels, saved to {}",
        outcome.sites.len(),
        outcome.levels_completed,
        output_path.display()
    );

    Ok(())
}

/// Assembles the run configuration: defaults, then file, then flags
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::new(cli.seed.clone());

    if let Some(path) = &cli.config {
        let file = load_file_config(path)
            .with_context(|| format!("failed to load config file {}", path.display()))?;
        apply_file_config(&mut config, file);
    }

    if let Some(endpoint) = &cli.proxy {
        config.proxy = ProxyConfig::parse(endpoint)
            .with_context(|| format!("invalid proxy endpoint {:?}, expected host:port", endpoint))?;
    }
    if let Some(depth) = cli.depth {
        config.crawler.max_depth = depth;
    }
    if let Some(delay) = cli.delay {
        config.crawler.delay_secs = delay;
    }
    if let Some(timeout) = cli.timeout {
        config.crawler.timeout_secs = timeout;
    }
    if let Some(max_words) = cli.max_words {
        config.crawler.max_content_words = max_words;
    }
    if cli.top {
        config.crawler.only_top_page = true;
    }
    if cli.follow_redirects {
        config.crawler.follow_redirects = true;
    }
    if let Some(output) = &cli.output {
        config.output.path = output.clone();
    }

    Ok(config)
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("onionscout=info,warn"),
            1 => EnvFilter::new("onionscout=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
