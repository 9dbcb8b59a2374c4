/// Page state definitions for tracking crawl progress
///
/// A URL moves `Queued → Fetching`, then to one of `Error`, `NonHtml`, or
/// `Html`. HTML pages continue `Parsed → LinksEnqueued`, and every path ends
/// in `Done`.
use std::fmt;

/// Represents the current state of a page in the crawl process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    // ===== Active States =====
    /// Page is in the frontier waiting to be fetched
    Queued,

    /// Page request is in flight
    Fetching,

    // ===== Fetch Outcomes =====
    /// Non-200 status or transport failure
    Error,

    /// Response was not `text/html`
    NonHtml,

    /// Response was an HTML page
    Html,

    // ===== HTML Processing =====
    /// Links and visible text were extracted
    Parsed,

    /// Discovered links were filtered and enqueued
    LinksEnqueued,

    // ===== Terminal =====
    /// Nothing left to do for this URL
    Done,
}

impl PageState {
    /// Returns true if the state machine allows moving from `self` to `next`
    pub fn can_transition_to(&self, next: PageState) -> bool {
        use PageState::*;
        matches!(
            (self, next),
            (Queued, Fetching)
                | (Fetching, Error)
                | (Fetching, NonHtml)
                | (Fetching, Html)
                | (Html, Parsed)
                | (Parsed, LinksEnqueued)
                | (LinksEnqueued, Done)
                | (Error, Done)
                | (NonHtml, Done)
        )
    }

    /// Returns true if this is the terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Returns true for the three possible results of a fetch
    pub fn is_fetch_outcome(&self) -> bool {
        matches!(self, Self::Error | Self::NonHtml | Self::Html)
    }

    /// Short name used in progress lines and statistics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Fetching => "fetching",
            Self::Error => "error",
            Self::NonHtml => "non_html",
            Self::Html => "html",
            Self::Parsed => "parsed",
            Self::LinksEnqueued => "links_enqueued",
            Self::Done => "done",
        }
    }

    /// Returns all possible page states
    pub fn all_states() -> Vec<Self> {
        vec![
            Self::Queued,
            Self::Fetching,
            Self::Error,
            Self::NonHtml,
            Self::Html,
            Self::Parsed,
            Self::LinksEnqueued,
            Self::Done,
        ]
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
