//! Crawl frontier and visited set
//!
//! The frontier is a FIFO queue, which makes the crawl breadth-first. Every
//! URL that has ever been queued is also recorded in the visited set, which
//! never shrinks; membership there is the only deduplication mechanism.

use std::collections::{HashSet, VecDeque};

/// FIFO queue of URLs awaiting fetch, plus the set of every URL ever queued
#[derive(Debug, Default)]
pub struct Frontier {
    /// URLs waiting to be fetched, in breadth-first order
    queue: VecDeque<String>,

    /// Every URL that was ever admitted to the queue
    visited: HashSet<String>,
}

impl Frontier {
    /// Creates a frontier holding only the seed
    ///
    /// The seed is marked visited so its own links cannot re-enqueue it.
    pub fn with_seed(seed: impl Into<String>) -> Self {
        let mut frontier = Self::default();
        frontier.offer(seed.into());
        frontier
    }

    /// Enqueues the URL unless it has been seen before
    ///
    /// The membership check and the insert are one operation, so a URL can
    /// never be admitted twice.
    ///
    /// # Returns
    ///
    /// * `true` - The URL was new and is now at the tail of the queue
    /// * `false` - The URL was already visited; nothing changed
    pub fn offer(&mut self, url: String) -> bool {
        if self.visited.contains(&url) {
            return false;
        }
        self.visited.insert(url.clone());
        self.queue.push_back(url);
        true
    }

    /// Records the URL as visited without queuing it
    ///
    /// Used for alternate spellings of a URL that is already queued, so a
    /// later `offer` of that spelling is rejected.
    pub fn mark_visited(&mut self, url: String) -> bool {
        self.visited.insert(url)
    }

    /// Removes and returns the head of the queue
    pub fn pop(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    /// Returns true if the URL has ever been admitted
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Number of URLs waiting to be fetched
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of URLs ever admitted, including those already fetched
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Iterates over the waiting URLs from head to tail
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.queue.iter().map(String::as_str)
    }
}
