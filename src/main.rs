//! Linkatlas main entry point
//!
//! Command-line interface for the same-host link and redirect mapper.

use anyhow::Context;
use clap::Parser;
use linkatlas::config::CrawlConfig;
use linkatlas::crawler::crawl;
use linkatlas::output::write_results;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Linkatlas: map every internal page of a website and where it redirects
///
/// Starting from the seed URL, Linkatlas fetches every internally-reachable
/// page, follows redirects, and writes a CSV mapping each source URL to its
/// final destination.
#[derive(Parser, Debug)]
#[command(name = "linkatlas")]
#[command(version)]
#[command(about = "Map a website's internal links and redirect targets", long_about = None)]
struct Cli {
    /// URL to start crawling from; its hostname defines the site boundary
    #[arg(value_name = "SEED_URL")]
    seed_url: Url,

    /// Maximum number of concurrent page fetches
    #[arg(short, long, default_value_t = 5)]
    concurrency: usize,

    /// Pacing delay before each newly discovered link is queued (ms)
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,

    /// Per-request fetch timeout (ms)
    #[arg(long, default_value_t = 10_000)]
    timeout_ms: u64,

    /// Output CSV path (default: crawl-results.csv on the desktop)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let config = CrawlConfig {
        seed_url: cli.seed_url,
        concurrency: cli.concurrency,
        delay_ms: cli.delay_ms,
        timeout_ms: cli.timeout_ms,
        output_path: cli.output.unwrap_or_else(default_output_path),
        debug: cli.debug,
    };

    linkatlas::config::validate(&config).context("invalid configuration")?;

    let output_path = config.output_path.clone();
    let started = std::time::Instant::now();

    let results = crawl(config).await.context("crawl failed to start")?;

    write_results(&output_path, &results)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    tracing::info!(
        "{} pages mapped in {:.1?}, results written to {}",
        results.len(),
        started.elapsed(),
        output_path.display()
    );

    Ok(())
}

/// Sets up the tracing subscriber based on the debug flag
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("linkatlas=debug,info")
    } else {
        EnvFilter::new("linkatlas=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Resolves the default output path
///
/// Prefers the user's desktop directory so the CSV is easy to find,
/// falling back to the current directory when no desktop exists (headless
/// machines, containers).
fn default_output_path() -> PathBuf {
    dirs::desktop_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("crawl-results.csv")
}
