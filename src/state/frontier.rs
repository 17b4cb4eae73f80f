//! The crawl frontier
//!
//! Tracks which URLs have been seen, are in flight, or are completed, and
//! owns the source→final URL result mapping. `register` is the single
//! deduplication gate: it must be consulted before any fetch is scheduled,
//! which is what guarantees no URL is ever fetched twice.

use crate::state::UrlState;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use url::Url;

/// Read-only counters for progress reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierSnapshot {
    /// URLs registered but not yet completed
    pub pending: usize,

    /// URLs whose fetch attempt has completed (success or failure)
    pub visited: usize,

    /// Entries in the source→final result map
    pub mapped: usize,
}

struct Inner {
    /// State per normalized URL; unseen URLs are absent
    states: HashMap<String, UrlState>,

    /// Source URL → final URL, for successfully fetched HTML pages only.
    /// BTreeMap keeps CSV output deterministic (sorted by source URL).
    results: BTreeMap<String, String>,

    pending: usize,
    visited: usize,
}

/// The authoritative registry of URL states and crawl results
///
/// Workers run on a multithreaded runtime, so every operation is a short
/// critical section behind a mutex. No operation blocks on I/O.
pub struct Frontier {
    inner: Mutex<Inner>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                states: HashMap::new(),
                results: BTreeMap::new(),
                pending: 0,
                visited: 0,
            }),
        }
    }

    /// Registers a URL for crawling
    ///
    /// Returns true and transitions the URL to pending iff it is currently
    /// unseen. Returns false with no effect when the URL is already pending
    /// or visited.
    ///
    /// # Arguments
    ///
    /// * `url` - The normalized URL to register
    pub fn register(&self, url: &Url) -> bool {
        let mut inner = self.inner.lock().expect("frontier mutex poisoned");

        let key = url.as_str().to_string();
        if inner.states.contains_key(&key) {
            return false;
        }

        inner.states.insert(key, UrlState::Pending);
        inner.pending += 1;
        true
    }

    /// Marks a URL's fetch attempt as completed
    ///
    /// Transitions the URL from pending to visited. When `final_url` is
    /// provided (HTML fetch succeeded), records the source→final mapping.
    /// Completing a URL that is not pending has no effect.
    ///
    /// # Arguments
    ///
    /// * `url` - The normalized URL whose fetch attempt finished
    /// * `final_url` - The post-redirect response URL, or None for failed
    ///   and non-HTML fetches
    pub fn complete(&self, url: &Url, final_url: Option<&str>) {
        let mut inner = self.inner.lock().expect("frontier mutex poisoned");
        let inner = &mut *inner;

        let key = url.as_str();
        match inner.states.get_mut(key) {
            Some(state) if state.is_active() => {
                *state = UrlState::Visited;
                inner.pending -= 1;
                inner.visited += 1;
            }
            Some(state) => {
                tracing::debug!("ignoring complete() for {} already {}", key, state);
                return;
            }
            None => {
                tracing::debug!("ignoring complete() for unregistered {}", key);
                return;
            }
        }

        if let Some(final_url) = final_url {
            inner
                .results
                .insert(key.to_string(), final_url.to_string());
        }
    }

    /// Returns read-only counters for progress reporting
    pub fn snapshot(&self) -> FrontierSnapshot {
        let inner = self.inner.lock().expect("frontier mutex poisoned");
        FrontierSnapshot {
            pending: inner.pending,
            visited: inner.visited,
            mapped: inner.results.len(),
        }
    }

    /// Returns the result map as (source, final) rows sorted by source URL
    pub fn results(&self) -> Vec<(String, String)> {
        let inner = self.inner.lock().expect("frontier mutex poisoned");
        inner
            .results
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}
