use regex::Regex;

/// Decides which normalized URLs are eligible for crawling
///
/// The pattern is searched for anywhere in the URL (unanchored), so callers
/// anchor it themselves with `^` when they mean "starts with".
#[derive(Debug, Clone)]
pub struct ScopeFilter {
    pattern: Regex,
}

impl ScopeFilter {
    /// Compiles the scope pattern
    ///
    /// An invalid pattern is a configuration error and is reported once, at
    /// startup, never per URL.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Returns true if the URL matches the scope pattern anywhere
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_crawler::url::ScopeFilter;
    ///
    /// let scope = ScopeFilter::new("^http://example\\.com/").unwrap();
    /// assert!(scope.in_scope("http://example.com/b"));
    /// assert!(!scope.in_scope("http://other.com/x"));
    /// ```
    pub fn in_scope(&self, url: &str) -> bool {
        self.pattern.is_match(url)
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}
