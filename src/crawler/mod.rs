//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with timeouts and redirect capture
//! - HTML parsing and internal-link extraction
//! - The bounded worker pool and quiescence detection

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{crawl, Coordinator};
pub use fetcher::{build_http_client, fetch_url, FetchOutcome};
pub use parser::extract_links;
