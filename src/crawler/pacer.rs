//! Politeness pacing
//!
//! The delay is measured from the moment a response finished arriving, so
//! time spent parsing and writing files counts against it.

use std::time::{Duration, Instant};

/// Enforces the minimum gap between one response and the next request
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Time still to wait at `now` for a response that completed at `completed_at`
    ///
    /// Zero once processing has already used up the whole delay.
    pub fn remaining(&self, completed_at: Instant, now: Instant) -> Duration {
        (completed_at + self.delay).saturating_duration_since(now)
    }

    /// Sleeps until `completed_at + delay`; returns immediately if that has passed
    pub async fn wait(&self, completed_at: Instant) {
        let remaining = self.remaining(completed_at, Instant::now());
        if remaining.is_zero() {
            return;
        }
        tracing::trace!("Pacing: sleeping {:?}", remaining);
        tokio::time::sleep(remaining).await;
    }
}
