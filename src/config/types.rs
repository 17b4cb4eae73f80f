use std::path::PathBuf;
use url::Url;

/// Main configuration record for a crawl
///
/// Built by the CLI and consumed read-only by the crawl engine.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// The URL the crawl starts from; its hostname defines "internal"
    pub seed_url: Url,

    /// Maximum number of concurrent page fetches
    pub concurrency: usize,

    /// Pacing delay applied before each newly discovered link is submitted
    /// (milliseconds)
    pub delay_ms: u64,

    /// Per-request fetch timeout (milliseconds)
    pub timeout_ms: u64,

    /// Where the final CSV is written
    pub output_path: PathBuf,

    /// Enables debug-level logging
    pub debug: bool,
}
