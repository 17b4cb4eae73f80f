//! Crawl coordinator - worker pool and termination detection
//!
//! This module drives the crawl to quiescence:
//! - a bounded pool of workers pulls URLs from a shared channel
//! - each worker performs fetch → complete → extract → register → submit
//! - an atomic outstanding-work counter detects quiescence: it is
//!   incremented when a URL is submitted and decremented only after the
//!   whole task (including child submissions) has finished, so it cannot
//!   transiently read zero while work remains
//! - the worker that drops the counter to zero signals shutdown over a
//!   watch channel instead of the pool busy-polling queue sizes

use crate::config::CrawlConfig;
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchOutcome};
use crate::crawler::parser::extract_links;
use crate::output::report_progress;
use crate::state::Frontier;
use crate::url::{extract_host, normalize_url};
use crate::{CrawlError, UrlError};
use reqwest::Client;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch, Mutex};
use url::Url;

/// Everything a worker needs, shared across the pool
struct WorkerContext {
    config: Arc<CrawlConfig>,
    frontier: Arc<Frontier>,
    client: Client,
    root_host: String,

    /// Submission side of the crawl queue
    tx: mpsc::UnboundedSender<Url>,

    /// Receive side of the crawl queue; workers take turns holding the lock
    queue: Mutex<mpsc::UnboundedReceiver<Url>>,

    /// URLs submitted but whose task has not yet finished
    outstanding: AtomicUsize,

    /// Quiescence signal
    done_tx: watch::Sender<bool>,
}

/// Main crawl coordinator structure
pub struct Coordinator {
    config: Arc<CrawlConfig>,
    frontier: Arc<Frontier>,
    client: Client,
    root_host: String,
    seed: Url,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// Normalizes the seed URL, derives the root hostname that defines
    /// "internal", and builds the HTTP client.
    ///
    /// # Arguments
    ///
    /// * `config` - The validated crawl configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(CrawlError)` - Seed URL unusable or client construction failed
    pub fn new(config: CrawlConfig) -> Result<Self, CrawlError> {
        let seed = normalize_url(config.seed_url.as_str())?;
        let root_host = extract_host(&seed).ok_or(UrlError::MissingHost)?;
        let client = build_http_client(&config)?;

        Ok(Self {
            config: Arc::new(config),
            frontier: Arc::new(Frontier::new()),
            client,
            root_host,
            seed,
        })
    }

    /// Runs the crawl to quiescence
    ///
    /// Seeds the frontier, spawns the worker pool and the progress
    /// reporter, and waits until no tasks are running and none are queued.
    /// A Ctrl-C interrupt stops admission early; partial results remain
    /// available through [`Coordinator::results`].
    pub async fn run(&self) -> Result<(), CrawlError> {
        tracing::info!(
            "starting crawl of {} ({} workers, {}ms pacing, {}ms timeout)",
            self.seed,
            self.config.concurrency,
            self.config.delay_ms,
            self.config.timeout_ms
        );

        let (tx, rx) = mpsc::unbounded_channel();
        let (done_tx, done_rx) = watch::channel(false);

        let ctx = Arc::new(WorkerContext {
            config: Arc::clone(&self.config),
            frontier: Arc::clone(&self.frontier),
            client: self.client.clone(),
            root_host: self.root_host.clone(),
            tx,
            queue: Mutex::new(rx),
            outstanding: AtomicUsize::new(0),
            done_tx,
        });

        // Seed the crawl. register() always succeeds on an empty frontier.
        self.frontier.register(&self.seed);
        submit(&ctx, self.seed.clone());

        let mut workers = Vec::with_capacity(self.config.concurrency);
        for worker_id in 0..self.config.concurrency {
            let ctx = Arc::clone(&ctx);
            let done_rx = done_rx.clone();
            workers.push(tokio::spawn(worker(worker_id, ctx, done_rx)));
        }

        let progress = tokio::spawn(report_progress(
            Arc::clone(&self.frontier),
            done_rx.clone(),
        ));

        let drain = async {
            for handle in workers {
                if let Err(e) = handle.await {
                    tracing::error!("worker task failed: {}", e);
                }
            }
        };

        tokio::select! {
            _ = drain => {
                tracing::info!("crawl reached quiescence");
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::warn!("interrupt received, stopping crawl with partial results");
                let _ = ctx.done_tx.send(true);
            }
        }

        // Stop the progress reporter if the workers did not already.
        let _ = ctx.done_tx.send(true);
        let _ = progress.await;

        Ok(())
    }

    /// Returns the source→final result rows, sorted by source URL
    pub fn results(&self) -> Vec<(String, String)> {
        self.frontier.results()
    }

    /// Returns the frontier's progress counters
    pub fn snapshot(&self) -> crate::state::FrontierSnapshot {
        self.frontier.snapshot()
    }
}

/// Submits a registered URL to the crawl queue
///
/// The outstanding counter is incremented before the send so the pool can
/// never observe zero while this URL is queued.
fn submit(ctx: &WorkerContext, url: Url) {
    ctx.outstanding.fetch_add(1, Ordering::SeqCst);
    if ctx.tx.send(url).is_err() {
        // Pool already shut down; undo the reservation.
        ctx.outstanding.fetch_sub(1, Ordering::SeqCst);
    }
}

/// A single crawl worker
///
/// Pulls URLs from the shared queue until the quiescence signal fires or
/// the queue closes. Each pulled URL is processed to completion, then the
/// outstanding counter is decremented; the worker that brings it to zero
/// signals the rest of the pool to shut down.
async fn worker(worker_id: usize, ctx: Arc<WorkerContext>, mut done_rx: watch::Receiver<bool>) {
    tracing::debug!("worker {} started", worker_id);

    loop {
        let next = {
            let mut queue = ctx.queue.lock().await;
            tokio::select! {
                url = queue.recv() => url,
                _ = done_rx.changed() => None,
            }
        };

        let Some(url) = next else {
            break;
        };

        process_url(&ctx, &url).await;

        if ctx.outstanding.fetch_sub(1, Ordering::SeqCst) == 1 {
            tracing::debug!("worker {} detected quiescence", worker_id);
            let _ = ctx.done_tx.send(true);
        }
    }

    tracing::debug!("worker {} finished", worker_id);
}

/// Processes a single URL: fetch, record the outcome, expand new links
///
/// Every failure is contained here and logged; the URL always transitions
/// to visited so persistent failures cannot stall the crawl.
async fn process_url(ctx: &WorkerContext, url: &Url) {
    let timeout = Duration::from_millis(ctx.config.timeout_ms);

    match fetch_url(&ctx.client, url, timeout).await {
        FetchOutcome::Html {
            final_url,
            status_code,
            body,
        } => {
            tracing::debug!("fetched {} (HTTP {}, final {})", url, status_code, final_url);
            ctx.frontier.complete(url, Some(&final_url));

            let links = extract_links(&body, url, &ctx.root_host);
            for link in links {
                if ctx.frontier.register(&link) {
                    // Pacing delay per newly discovered link, applied at
                    // discovery time. This limits the submission rate of a
                    // single page's expansion, not the global request rate.
                    if ctx.config.delay_ms > 0 {
                        tokio::time::sleep(Duration::from_millis(ctx.config.delay_ms)).await;
                    }
                    submit(ctx, link);
                }
            }
        }

        FetchOutcome::Skipped { content_type } => {
            tracing::debug!("skipping {} (content-type '{}')", url, content_type);
            ctx.frontier.complete(url, None);
        }

        FetchOutcome::Failed { error } => {
            tracing::warn!("fetch failed for {}: {}", url, error);
            ctx.frontier.complete(url, None);
        }
    }
}

/// Runs a complete crawl and returns the result rows
///
/// This is the main library entry point. It drives the crawl to
/// quiescence and hands back the final source→final mapping for the
/// reporter to render.
///
/// # Arguments
///
/// * `config` - The validated crawl configuration
///
/// # Returns
///
/// * `Ok(rows)` - The (source URL, final URL) rows, sorted by source
/// * `Err(CrawlError)` - Startup failed before any crawling began
pub async fn crawl(config: CrawlConfig) -> Result<Vec<(String, String)>, CrawlError> {
    let coordinator = Coordinator::new(config)?;
    coordinator.run().await?;

    let snapshot = coordinator.snapshot();
    tracing::info!(
        "crawl finished: {} URLs visited, {} pages mapped",
        snapshot.visited,
        snapshot.mapped
    );

    Ok(coordinator.results())
}
