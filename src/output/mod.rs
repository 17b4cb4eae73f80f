//! Output module for Linkatlas
//!
//! The reporter side of the crawl: periodic progress logging while the
//! crawl runs, and the final CSV rendering of the result map. Nothing here
//! feeds back into the crawl engine.

mod csv;
mod progress;

pub use csv::write_results;
pub use progress::report_progress;
