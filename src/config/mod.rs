//! Configuration module for Linkatlas
//!
//! The configuration record is built from command-line arguments by the
//! binary and validated here before any crawling begins. Validation errors
//! are fatal startup errors.

mod types;
mod validation;

// Re-export types
pub use types::CrawlConfig;

// Re-export validation
pub use validation::validate;
