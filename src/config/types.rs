use serde::Deserialize;

/// Crawl configuration, immutable for the lifetime of a run
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CrawlConfig {
    /// Absolute URL the crawl starts from
    pub seed_url: String,

    /// Scope pattern; discovered links must match it to be enqueued
    pub url_regex: String,

    /// Politeness delay between response completion and the next request (milliseconds)
    pub sleep_time: u64,

    /// Save the raw body of every fetched HTML page
    #[serde(default)]
    pub save_html: bool,

    /// Save the visible text of every fetched HTML page
    #[serde(default)]
    pub save_text: bool,

    /// Directory raw HTML pages are written to
    #[serde(default = "default_html_dir")]
    pub html_dir: String,

    /// Directory visible-text files are written to
    #[serde(default = "default_text_dir")]
    pub text_dir: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout enforced by the HTTP client (seconds)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Treat robots.txt disallow entries as prefixes rather than exact URLs
    #[serde(default)]
    pub robots_prefix_match: bool,
}

fn default_html_dir() -> String {
    "html".to_string()
}

fn default_text_dir() -> String {
    "text".to_string()
}

fn default_user_agent() -> String {
    format!("simple-crawler/{}", env!("CARGO_PKG_VERSION"))
}

fn default_request_timeout() -> u64 {
    30
}

impl CrawlConfig {
    /// Builds a configuration with the required keys and every optional key at its default
    pub fn new(seed_url: impl Into<String>, url_regex: impl Into<String>, sleep_time: u64) -> Self {
        Self {
            seed_url: seed_url.into(),
            url_regex: url_regex.into(),
            sleep_time,
            save_html: false,
            save_text: false,
            html_dir: default_html_dir(),
            text_dir: default_text_dir(),
            user_agent: default_user_agent(),
            request_timeout: default_request_timeout(),
            robots_prefix_match: false,
        }
    }
}
