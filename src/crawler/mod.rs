//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching, one request at a time
//! - HTML link and visible-text extraction
//! - The FIFO frontier and visited set
//! - Politeness pacing
//! - Overall crawl coordination

mod engine;
mod extractor;
mod fetcher;
mod frontier;
mod pacer;

pub use engine::{run_crawl, Crawler, LinkVerdict, PageReport};
pub use extractor::{extract, ExtractedPage};
pub use fetcher::{build_http_client, FetchResult, HttpFetcher};
pub use frontier::Frontier;
pub use pacer::Pacer;

use crate::config::CrawlConfig;
use crate::output::CrawlStatistics;
use crate::CrawlError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client
/// 2. Fetch robots.txt and build the exclusion policy
/// 3. Fetch pages in breadth-first order, pacing between requests
/// 4. Save pages and follow in-scope links
/// 5. Return the run statistics
pub async fn crawl(config: CrawlConfig) -> Result<CrawlStatistics, CrawlError> {
    run_crawl(config).await
}
