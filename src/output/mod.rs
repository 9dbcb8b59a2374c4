//! Output module for crawl artifacts and reports
//!
//! This module handles:
//! - Saving fetched HTML pages and their visible text
//! - Recording and printing crawl statistics

mod files;
pub mod stats;

pub use files::{page_file_stem, PageWriter};
pub use stats::{print_statistics, CrawlStatistics};
