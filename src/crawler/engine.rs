//! Crawl engine - main crawl orchestration logic
//!
//! This module contains the main crawl loop, which coordinates:
//! - Fetching robots.txt once and building the exclusion policy
//! - Managing the frontier queue and visited set
//! - Fetching, extracting, and persisting each page
//! - Filtering and enqueuing discovered links
//! - Politeness pacing between requests

use crate::config::{validate, CrawlConfig};
use crate::crawler::extractor::extract;
use crate::crawler::fetcher::{FetchResult, HttpFetcher};
use crate::crawler::frontier::Frontier;
use crate::crawler::pacer::Pacer;
use crate::output::{CrawlStatistics, PageWriter};
use crate::robots::{fetch_robots, MatchMode, RobotsPolicy};
use crate::state::PageState;
use crate::url::{Origin, ScopeFilter};
use crate::CrawlError;
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// What happened to a single discovered link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkVerdict {
    /// Fragment-only reference, not a candidate link
    Ignored,
    /// Added to the tail of the frontier
    Enqueued,
    /// Disallowed by robots.txt
    Blocked,
    /// Did not match the scope pattern
    OutOfScope,
    /// Already in the visited set
    Duplicate,
}

/// Progress line for one visited URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    pub url: String,
    /// HTTP status, or `None` if the request never got a response
    pub status: Option<u16>,
    /// Fetch outcome: `Error`, `NonHtml`, or `Html`
    pub outcome: PageState,
    /// Links this page added to the frontier
    pub new_links: usize,
    /// Frontier size after processing this page
    pub frontier_size: usize,
}

impl fmt::Display for PageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> ", self.url)?;
        match self.status {
            Some(status) => write!(f, "{}", status)?,
            None => write!(f, "---")?,
        }
        match self.outcome {
            PageState::Html => write!(
                f,
                " ({} new links, {} total)",
                self.new_links, self.frontier_size
            ),
            PageState::NonHtml => write!(f, " (skipped; non-html)"),
            _ => write!(f, " (error!)"),
        }
    }
}

/// Single-threaded breadth-first crawler
///
/// Owns the frontier and visited set for the lifetime of the run. Exactly
/// one request is in flight at any time, so no locking is needed.
pub struct Crawler {
    config: CrawlConfig,
    origin: Origin,
    scope: ScopeFilter,
    robots: RobotsPolicy,
    frontier: Frontier,
    fetcher: HttpFetcher,
    writer: PageWriter,
    pacer: Pacer,
    stats: CrawlStatistics,
}

impl Crawler {
    /// Creates a crawler from a configuration
    ///
    /// The configuration is validated again here, so an invalid one is
    /// rejected before any network activity. The robots policy starts
    /// empty; [`Crawler::run`] fetches it.
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to run, with the seed queued and visited
    /// * `Err(CrawlError)` - Invalid configuration or HTTP client setup failure
    pub fn new(config: CrawlConfig) -> Result<Self, CrawlError> {
        validate(&config)?;

        let origin = Origin::from_seed(&config.seed_url)?;
        let scope = ScopeFilter::new(&config.url_regex).map_err(crate::ConfigError::from)?;
        let fetcher = HttpFetcher::new(&config)?;

        let writer = PageWriter::new(
            config.save_html.then(|| PathBuf::from(&config.html_dir)),
            config.save_text.then(|| PathBuf::from(&config.text_dir)),
        );

        // Links back to the seed arrive normalized, which may differ from
        // the configured spelling (e.g. a trailing slash)
        let mut frontier = Frontier::with_seed(config.seed_url.clone());
        frontier.mark_visited(origin.normalize(&config.seed_url));

        Ok(Self {
            origin,
            scope,
            robots: RobotsPolicy::allow_all(),
            frontier,
            fetcher,
            writer,
            pacer: Pacer::from_millis(config.sleep_time),
            stats: CrawlStatistics::new(),
            config,
        })
    }

    /// Replaces the robots policy, keeping the configured match mode
    pub fn with_robots(mut self, robots: RobotsPolicy) -> Self {
        self.set_robots(robots);
        self
    }

    fn set_robots(&mut self, robots: RobotsPolicy) {
        let mode = if self.config.robots_prefix_match {
            MatchMode::Prefix
        } else {
            MatchMode::Exact
        };
        self.robots = robots.with_mode(mode);
        self.stats.robots_entries = self.robots.len() as u64;
    }

    /// Fetches robots.txt for the seed origin and installs the resulting policy
    pub async fn load_robots(&mut self) {
        let robots = fetch_robots(&self.fetcher, &self.origin).await;
        tracing::info!("Blocked {} urls...", robots.len());
        self.set_robots(robots);
    }

    /// Runs the crawl until the frontier is empty
    ///
    /// # Returns
    ///
    /// Statistics for the whole run. Per-URL failures never end the run.
    pub async fn run(mut self) -> Result<CrawlStatistics, CrawlError> {
        tracing::info!(
            "Starting crawl at {} (scope: {}, delay: {:?})",
            self.config.seed_url,
            self.scope.as_str(),
            self.pacer.delay()
        );
        if self.writer.saves_html() {
            tracing::info!("Saving raw HTML to {}/", self.config.html_dir);
        }
        if self.writer.saves_text() {
            tracing::info!("Saving visible text to {}/", self.config.text_dir);
        }

        self.load_robots().await;

        if self.robots.is_blocked(&self.config.seed_url) {
            tracing::warn!(
                "Seed URL {} is disallowed by robots.txt; nothing to crawl",
                self.config.seed_url
            );
            self.stats.seed_blocked = true;
            self.frontier.pop();
        }

        while let Some(report) = self.step().await {
            tracing::info!("{}", report);
        }

        self.stats.finish();
        tracing::info!(
            "Crawl completed: {} pages fetched, {} urls visited",
            self.stats.pages_fetched(),
            self.frontier.visited_count()
        );

        Ok(self.stats)
    }

    /// Processes the head of the frontier
    ///
    /// Fetches it, handles the response, then waits out the politeness
    /// delay measured from when the response completed.
    ///
    /// # Returns
    ///
    /// * `Some(PageReport)` - One URL was processed
    /// * `None` - The frontier is empty
    pub async fn step(&mut self) -> Option<PageReport> {
        let url = self.frontier.pop()?;
        let mut state = advance(&url, PageState::Queued, PageState::Fetching);

        let (status, new_links, completed_at) = match self.fetcher.fetch(&url).await {
            Ok(result) => {
                tracing::debug!(
                    "Fetched {} at {} ({} bytes, {:?})",
                    url,
                    result.fetched_at.to_rfc3339(),
                    result.body.len(),
                    result.content_type
                );
                let completed_at = result.completed_at;
                let (outcome, new_links) = self.handle_response(&result);
                state = advance(&url, state, outcome);
                (Some(result.status_code), new_links, completed_at)
            }
            Err(e) => {
                let completed_at = Instant::now();
                tracing::warn!("{}", e);
                state = advance(&url, state, PageState::Error);
                (None, 0, completed_at)
            }
        };

        self.stats.record_outcome(state);
        let outcome = state;

        if outcome == PageState::Html {
            state = advance(&url, state, PageState::Parsed);
            state = advance(&url, state, PageState::LinksEnqueued);
        }
        advance(&url, state, PageState::Done);

        self.pacer.wait(completed_at).await;

        Some(PageReport {
            url,
            status,
            outcome,
            new_links,
            frontier_size: self.frontier.len(),
        })
    }

    /// Classifies a response and, for HTML pages, persists and expands it
    ///
    /// Returns the fetch outcome and the number of links added to the frontier.
    fn handle_response(&mut self, result: &FetchResult) -> (PageState, usize) {
        if !result.is_ok() {
            return (PageState::Error, 0);
        }

        if !result.is_html() {
            tracing::debug!(
                "Skipping {} with content type {:?}",
                result.url,
                result.content_type
            );
            return (PageState::NonHtml, 0);
        }

        self.save_html(&result.url, &result.body);

        let page = extract(&result.body);
        self.save_text(&result.url, &page.text_nodes);

        let new_links = page
            .links
            .iter()
            .filter(|href| self.admit_link(href) == LinkVerdict::Enqueued)
            .count();

        (PageState::Html, new_links)
    }

    fn save_html(&mut self, url: &str, body: &str) {
        match self.writer.write_html(url, body) {
            Ok(Some(path)) => {
                tracing::debug!("Saved {}", path.display());
                self.stats.html_files_written += 1;
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Failed to save HTML for {}: {}", url, e);
                self.stats.write_failures += 1;
            }
        }
    }

    fn save_text(&mut self, url: &str, text_nodes: &[String]) {
        match self.writer.write_text(url, text_nodes) {
            Ok(Some(path)) => {
                tracing::debug!("Saved {}", path.display());
                self.stats.text_files_written += 1;
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Failed to save text for {}: {}", url, e);
                self.stats.write_failures += 1;
            }
        }
    }

    /// Runs one discovered link reference through the admission pipeline
    ///
    /// normalize → robots → scope → visited-set dedup → enqueue
    pub fn admit_link(&mut self, href: &str) -> LinkVerdict {
        if href.starts_with('#') {
            return LinkVerdict::Ignored;
        }
        self.stats.links_discovered += 1;

        let url = self.origin.normalize(href);

        let verdict = if self.robots.is_blocked(&url) {
            self.stats.links_blocked += 1;
            LinkVerdict::Blocked
        } else if !self.scope.in_scope(&url) {
            self.stats.links_out_of_scope += 1;
            LinkVerdict::OutOfScope
        } else if self.frontier.offer(url.clone()) {
            self.stats.links_enqueued += 1;
            LinkVerdict::Enqueued
        } else {
            self.stats.links_duplicate += 1;
            LinkVerdict::Duplicate
        };

        tracing::trace!("{} -> {} ({:?})", href, url, verdict);
        verdict
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn robots(&self) -> &RobotsPolicy {
        &self.robots
    }

    pub fn stats(&self) -> &CrawlStatistics {
        &self.stats
    }
}

/// Moves a URL to its next state, logging the transition
fn advance(url: &str, from: PageState, to: PageState) -> PageState {
    debug_assert!(
        from.can_transition_to(to),
        "invalid transition {} -> {} for {}",
        from,
        to,
        url
    );
    tracing::trace!("{}: {} -> {}", url, from, to);
    to
}

/// Runs a complete crawl for the given configuration
///
/// # Example
///
/// ```no_run
/// use simple_crawler::config::load_config;
/// use simple_crawler::crawler::run_crawl;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("config.toml"))?;
/// let stats = run_crawl(config).await?;
/// println!("{} pages fetched", stats.pages_fetched());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: CrawlConfig) -> Result<CrawlStatistics, CrawlError> {
    Crawler::new(config)?.run().await
}
