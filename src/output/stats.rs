//! Run statistics
//!
//! Counters collected by the crawl engine while it runs, and a formatter
//! that prints them once the frontier is exhausted.

use crate::state::PageState;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Crawl statistics summary
#[derive(Debug, Clone)]
pub struct CrawlStatistics {
    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the frontier was exhausted
    pub finished_at: Option<DateTime<Utc>>,

    /// Count of fetched URLs by fetch outcome (Error, NonHtml, Html)
    pub pages_by_outcome: HashMap<PageState, u64>,

    /// Number of disallow entries in the robots policy
    pub robots_entries: u64,

    /// Whether the seed itself was disallowed by robots.txt
    pub seed_blocked: bool,

    /// Total link references seen on HTML pages
    pub links_discovered: u64,

    /// Links admitted to the frontier
    pub links_enqueued: u64,

    /// Links rejected by robots.txt
    pub links_blocked: u64,

    /// Links rejected by the scope pattern
    pub links_out_of_scope: u64,

    /// Links rejected because they were already visited
    pub links_duplicate: u64,

    /// Raw HTML files written
    pub html_files_written: u64,

    /// Visible-text files written
    pub text_files_written: u64,

    /// File writes that failed
    pub write_failures: u64,
}

impl Default for CrawlStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl CrawlStatistics {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            pages_by_outcome: HashMap::new(),
            robots_entries: 0,
            seed_blocked: false,
            links_discovered: 0,
            links_enqueued: 0,
            links_blocked: 0,
            links_out_of_scope: 0,
            links_duplicate: 0,
            html_files_written: 0,
            text_files_written: 0,
            write_failures: 0,
        }
    }

    /// Counts one fetched URL under its fetch outcome
    pub fn record_outcome(&mut self, outcome: PageState) {
        debug_assert!(outcome.is_fetch_outcome(), "{} is not a fetch outcome", outcome);
        *self.pages_by_outcome.entry(outcome).or_insert(0) += 1;
    }

    /// Number of URLs with the given fetch outcome
    pub fn outcome_count(&self, outcome: PageState) -> u64 {
        self.pages_by_outcome.get(&outcome).copied().unwrap_or(0)
    }

    /// Total URLs fetched (or attempted)
    pub fn pages_fetched(&self) -> u64 {
        self.pages_by_outcome.values().sum()
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Run duration in seconds, once finished
    pub fn duration_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Overview:");
    println!("  Started: {}", stats.started_at.to_rfc3339());
    if let Some(finished) = stats.finished_at {
        println!("  Finished: {}", finished.to_rfc3339());
    }
    if let Some(seconds) = stats.duration_seconds() {
        println!("  Duration: {}s", seconds);
    }
    println!("  Pages fetched: {}", stats.pages_fetched());
    println!("  Robots.txt exclusions: {}", stats.robots_entries);
    if stats.seed_blocked {
        println!("  Seed URL was disallowed by robots.txt");
    }
    println!();

    println!("Pages by Outcome:");
    let total = stats.pages_fetched();
    for outcome in [PageState::Html, PageState::NonHtml, PageState::Error] {
        let count = stats.outcome_count(outcome);
        let percentage = if total > 0 {
            (count as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        println!("  {}: {} ({:.1}%)", outcome, count, percentage);
    }
    println!();

    println!("Links:");
    println!("  Discovered: {}", stats.links_discovered);
    println!("  Enqueued: {}", stats.links_enqueued);
    println!("  Blocked by robots.txt: {}", stats.links_blocked);
    println!("  Out of scope: {}", stats.links_out_of_scope);
    println!("  Already visited: {}", stats.links_duplicate);
    println!();

    println!("Files:");
    println!("  HTML written: {}", stats.html_files_written);
    println!("  Text written: {}", stats.text_files_written);
    if stats.write_failures > 0 {
        println!("  Write failures: {}", stats.write_failures);
    }
}
