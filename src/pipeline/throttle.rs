//! Call spacing for the sequential embedding loop.

use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Enforces a minimum interval between consecutive calls.
///
/// A deliberately simple form of backpressure against the embedding
/// provider's rate limit: the loop is sequential, so spacing calls out is
/// equivalent to a one-token bucket refilling at `1 / interval`.
pub struct Throttle {
    interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Mutex::new(None),
        }
    }

    /// Sleeps until at least `interval` has passed since the previous
    /// acquire. A zero interval disables spacing entirely.
    pub async fn acquire(&self) {
        if self.interval.is_zero() {
            return;
        }
        let mut last = self.last.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.interval {
                tokio::time::sleep(self.interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}
