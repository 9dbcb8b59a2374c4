//! State module for tracking crawl progress
//!
//! `PageState` describes where a single URL is in the fetch → extract →
//! enqueue cycle.

mod page_state;

pub use page_state::PageState;
