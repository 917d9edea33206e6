//! Bounded polling for eventually-consistent reads.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

/// Polls `condition` every `interval` until it returns true or `timeout`
/// elapses.
///
/// The condition is checked once immediately. Returns whether it was met;
/// running out of time is not an error.
pub async fn wait_until<F, Fut>(timeout: Duration, interval: Duration, mut condition: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let deadline = Instant::now() + timeout;
    loop {
        if condition().await {
            return true;
        }
        let now = Instant::now();
        if now >= deadline {
            return false;
        }
        tokio::time::sleep_until((now + interval).min(deadline)).await;
    }
}
