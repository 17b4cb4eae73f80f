/// URL state definitions for tracking crawl progress
///
/// A URL is in exactly one of three states at any instant. The unseen state
/// has no variant here: a URL the frontier has never registered is simply
/// absent from its map.
use std::fmt;

/// Represents the registered state of a URL in the crawl
///
/// Transition is strictly pending → visited; a URL never regresses and is
/// never re-fetched once visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlState {
    /// Registered; fetch in flight or queued
    Pending,

    /// Fetch attempt completed, success or failure
    Visited,
}

impl UrlState {
    /// Returns true if the URL may still be fetched
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl fmt::Display for UrlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Visited => write!(f, "visited"),
        }
    }
}
