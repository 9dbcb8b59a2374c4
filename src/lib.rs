//! Simple Crawler: a polite breadth-first web crawler
//!
//! Starting from a seed URL, this crate follows hyperlinks in breadth-first
//! order, restricted to a scope pattern, while respecting the site's
//! robots.txt and a fixed delay between requests. Fetched HTML pages can be
//! saved raw and/or as their visible text.

pub mod config;
pub mod crawler;
pub mod output;
pub mod robots;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for crawl operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
///
/// All of these are raised before any network activity takes place.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Couldn't figure out protocol and domain in seed url: {0}")]
    UnparsableSeed(String),

    #[error("Invalid url-regex: {0}")]
    InvalidRegex(#[from] regex::Error),

    #[error("No saving settings present: enable save-html and/or save-text")]
    NoOutputEnabled,
}

/// Per-request transport failure (the server never produced a response)
#[derive(Debug, Error)]
#[error("Request to {url} failed: {source}")]
pub struct FetchError {
    pub url: String,
    #[source]
    pub source: reqwest::Error,
}

/// Result type alias for crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use crawler::Crawler;
pub use state::PageState;
pub use crate::url::{normalize, Origin, ScopeFilter};
