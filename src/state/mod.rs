//! Crawl state module for Linkatlas
//!
//! This module owns the frontier: the authoritative registry of URL states
//! and the source→final result mapping. No other component duplicates this
//! state; they read from it or request mutation through it.

mod frontier;
mod url_state;

pub use frontier::{Frontier, FrontierSnapshot};
pub use url_state::UrlState;
