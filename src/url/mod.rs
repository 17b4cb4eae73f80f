//! URL handling module for Linkatlas
//!
//! This module provides URL normalization and host identity checks. The
//! seed URL's hostname defines what counts as "internal" for the crawl.

mod host;
mod normalize;

// Re-export main functions
pub use host::{extract_host, is_internal};
pub use normalize::normalize_url;
