//! Bounded retry with exponential backoff for the embedding call.
//!
//! Aborting a long batch on the first transient network error wastes every
//! embedding collected so far, but a silent retry can mask a misconfigured
//! provider. Retry is therefore available but opt-in: the default pipeline
//! configuration performs no retries.

use crate::Error;
use tokio::time::Duration;

#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Additional attempts after the first failure.
    pub max_retries: u32,
    pub min_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            min_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(5),
        }
    }
}

impl RetryConfig {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
    }

    pub fn with_min_delay(mut self, delay: Duration) -> Self {
        self.min_delay = delay;
        self
    }

    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Exponential backoff: `min_delay * 2^attempt`, capped at `max_delay`.
    fn backoff(&self, attempt: u32) -> Duration {
        let base = self.min_delay.as_millis() as u64;
        let cap = self.max_delay.as_millis() as u64;
        let shift = attempt.min(62);
        let delay = base.saturating_mul(1u64 << shift).min(cap);
        Duration::from_millis(delay)
    }

    /// Delay before retrying `attempt` (0-based), or `None` when the budget
    /// is exhausted or the error is not transient.
    pub fn should_retry(&self, attempt: u32, error: &Error) -> Option<Duration> {
        if attempt >= self.max_retries {
            return None;
        }
        if !error.is_transient() {
            return None;
        }
        Some(self.backoff(attempt))
    }
}
