//! Robots.txt exclusion policy
//!
//! Only the first `User-agent: *` block of the document is honored; every
//! `Disallow:` rule in it becomes a blocked URL on the seed origin.

use crate::url::Origin;
use std::collections::HashSet;

const WILDCARD_AGENT_LINE: &str = "User-agent: *";
const USER_AGENT_DIRECTIVE: &str = "User-agent: ";
const DISALLOW_DIRECTIVE: &str = "Disallow: ";

/// How discovered URLs are compared against disallow entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// A URL is blocked only if it equals a disallow entry
    #[default]
    Exact,
    /// A URL is blocked if it starts with a disallow entry
    Prefix,
}

/// Set of URLs the site asks crawlers not to fetch
#[derive(Debug, Clone, Default)]
pub struct RobotsPolicy {
    disallowed: HashSet<String>,
    mode: MatchMode,
}

impl RobotsPolicy {
    /// A policy with no exclusions
    ///
    /// Used when robots.txt is missing, unreachable, or returns an error.
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// Parses an exclusion document for the given origin
    ///
    /// # Parsing Rules
    ///
    /// 1. Skip lines until one is exactly `User-agent: *`; without it nothing is blocked
    /// 2. Stop at the next `User-agent: ` line whose value is not `*`
    /// 3. Every line containing `Disallow: ` blocks `protocol://domain` + the rest of the line
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_crawler::robots::RobotsPolicy;
    /// use simple_crawler::url::Origin;
    ///
    /// let origin = Origin::from_seed("http://example.com/a").unwrap();
    /// let robots = RobotsPolicy::parse("User-agent: *\nDisallow: /private", &origin);
    /// assert!(robots.is_blocked("http://example.com/private"));
    /// assert!(!robots.is_blocked("http://example.com/public"));
    /// ```
    pub fn parse(document: &str, origin: &Origin) -> Self {
        let base = origin.base();
        let mut disallowed = HashSet::new();

        let mut lines = document.lines();
        if lines.by_ref().any(|line| line == WILDCARD_AGENT_LINE) {
            for line in lines {
                if line.contains(USER_AGENT_DIRECTIVE) && !line.trim_end().ends_with('*') {
                    break;
                }

                let Some(pos) = line.find(DISALLOW_DIRECTIVE) else {
                    continue;
                };

                let path = line[pos + DISALLOW_DIRECTIVE.len()..].trim_end();
                if path.is_empty() {
                    continue;
                }

                disallowed.insert(format!("{}{}", base, path));
            }
        }

        Self {
            disallowed,
            mode: MatchMode::Exact,
        }
    }

    /// Switches how URLs are compared against the disallow entries
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns true if the URL must never be fetched
    pub fn is_blocked(&self, url: &str) -> bool {
        match self.mode {
            MatchMode::Exact => self.disallowed.contains(url),
            MatchMode::Prefix => self
                .disallowed
                .iter()
                .any(|entry| url.starts_with(entry.as_str())),
        }
    }

    /// Number of disallow entries
    pub fn len(&self) -> usize {
        self.disallowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disallowed.is_empty()
    }

    /// Iterates over the disallow entries in no particular order
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.disallowed.iter().map(String::as_str)
    }
}
