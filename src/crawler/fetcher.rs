//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with the configured user agent and timeout
//! - Single GET requests, one in flight at a time
//! - Recording when each response finished arriving, for politeness pacing

use crate::config::CrawlConfig;
use crate::FetchError;
use chrono::{DateTime, Utc};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};

/// Outcome of a request that produced an HTTP response
///
/// A non-200 status is still a `FetchResult`; only transport failures are
/// reported as [`FetchError`].
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// The requested URL
    pub url: String,
    /// HTTP status code
    pub status_code: u16,
    /// Content-Type header value (empty if absent)
    pub content_type: String,
    /// Response body
    pub body: String,
    /// Monotonic instant the body finished arriving
    pub completed_at: Instant,
    /// Wall-clock time the body finished arriving
    pub fetched_at: DateTime<Utc>,
}

impl FetchResult {
    /// True for HTTP 200, the only status whose body is processed
    pub fn is_ok(&self) -> bool {
        self.status_code == StatusCode::OK.as_u16()
    }

    /// True if the Content-Type header mentions `text/html`
    pub fn is_html(&self) -> bool {
        self.content_type.contains("text/html")
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use simple_crawler::config::CrawlConfig;
/// use simple_crawler::crawler::build_http_client;
///
/// let config = CrawlConfig::new("http://example.com/", "example", 500);
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &CrawlConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.request_timeout))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Blocking-style page fetcher: each call completes before the next starts
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &CrawlConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(build_http_client(config)?))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Performs a single GET request
    ///
    /// The completion time is taken right after the body has been read, so
    /// pacing measures from the end of the transfer, not from dispatch.
    ///
    /// # Returns
    ///
    /// * `Ok(FetchResult)` - The server answered (any status code)
    /// * `Err(FetchError)` - Connection, timeout, or body read failure
    pub async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        let to_fetch_error = |source| FetchError {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(to_fetch_error)?;

        let status_code = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let body = response.text().await.map_err(to_fetch_error)?;

        Ok(FetchResult {
            url: url.to_string(),
            status_code,
            content_type,
            body,
            completed_at: Instant::now(),
            fetched_at: Utc::now(),
        })
    }
}
