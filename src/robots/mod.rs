//! Robots.txt handling module
//!
//! This module fetches the seed origin's robots.txt once at startup and turns
//! it into a [`RobotsPolicy`] consulted for every discovered link.

mod policy;

pub use policy::{MatchMode, RobotsPolicy};

use crate::crawler::HttpFetcher;
use crate::url::Origin;

/// Fetches and parses robots.txt for the seed origin
///
/// A missing document, an error status, a transport failure, or an empty
/// body all yield a policy without exclusions; none of them is fatal.
pub async fn fetch_robots(fetcher: &HttpFetcher, origin: &Origin) -> RobotsPolicy {
    let robots_url = origin.robots_url();
    tracing::info!("Obtaining robots.txt from {}", robots_url);

    match fetcher.fetch(&robots_url).await {
        Ok(result) if result.is_ok() && !result.body.trim().is_empty() => {
            RobotsPolicy::parse(&result.body, origin)
        }
        Ok(result) => {
            tracing::debug!(
                "No usable robots.txt (status {}, {} bytes)",
                result.status_code,
                result.body.len()
            );
            RobotsPolicy::allow_all()
        }
        Err(e) => {
            tracing::warn!("{}; crawling without exclusions", e);
            RobotsPolicy::allow_all()
        }
    }
}
