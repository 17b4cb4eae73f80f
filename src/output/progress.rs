use crate::state::Frontier;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// How often progress counters are logged
const PROGRESS_INTERVAL: Duration = Duration::from_secs(1);

/// Periodically logs the frontier's progress counters
///
/// Runs until the quiescence signal fires. Intended to be spawned next to
/// the worker pool; it only reads the frontier and produces no input back
/// into the crawl.
///
/// # Arguments
///
/// * `frontier` - The frontier to snapshot
/// * `done` - The crawl's quiescence signal
pub async fn report_progress(frontier: Arc<Frontier>, mut done: watch::Receiver<bool>) {
    let mut ticker = tokio::time::interval(PROGRESS_INTERVAL);

    // The first tick completes immediately; skip it so the log starts one
    // interval into the crawl.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let snapshot = frontier.snapshot();
                tracing::info!(
                    "progress: {} pending, {} visited, {} mapped",
                    snapshot.pending,
                    snapshot.visited,
                    snapshot.mapped
                );
            }
            _ = done.changed() => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reporter_stops_on_done_signal() {
        let frontier = Arc::new(Frontier::new());
        let (done_tx, done_rx) = watch::channel(false);

        let handle = tokio::spawn(report_progress(frontier, done_rx));
        done_tx.send(true).unwrap();

        // Must return promptly instead of ticking forever
        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("reporter did not stop")
            .unwrap();
    }

    #[tokio::test]
    async fn test_reporter_stops_when_signal_fired_before_start() {
        let frontier = Arc::new(Frontier::new());
        let (done_tx, done_rx) = watch::channel(false);
        done_tx.send(true).unwrap();

        let handle = tokio::spawn(report_progress(frontier, done_rx));
        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("reporter did not stop")
            .unwrap();
    }
}
