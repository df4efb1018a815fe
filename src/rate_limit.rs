use std::net::IpAddr;
use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::state::SharedState;

/// Per-client contact submission limiter using a fixed window.
#[derive(Default)]
pub struct SubmissionRateLimiter {
    /// ip -> (count, window_start)
    entries: DashMap<IpAddr, (u32, Instant)>,
}

impl SubmissionRateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if request is allowed. Returns Ok(()) or Err with retry-after seconds.
    pub fn check(&self, ip: IpAddr, limit: u32, window_secs: u64) -> Result<(), u64> {
        self.check_at(ip, limit, window_secs, Instant::now())
    }

    pub fn check_at(
        &self,
        ip: IpAddr,
        limit: u32,
        window_secs: u64,
        now: Instant,
    ) -> Result<(), u64> {
        let window = Duration::from_secs(window_secs);

        let mut entry = self.entries.entry(ip).or_insert((0, now));
        let (count, start) = entry.value_mut();

        if now.duration_since(*start) > window {
            *count = 1;
            *start = now;
            return Ok(());
        }

        if *count >= limit {
            let elapsed = now.duration_since(*start).as_secs();
            return Err(window_secs.saturating_sub(elapsed).max(1));
        }

        *count += 1;
        Ok(())
    }

    /// Remove stale entries older than the given duration.
    pub fn cleanup(&self, max_age: Duration) {
        self.cleanup_at(max_age, Instant::now());
    }

    pub fn cleanup_at(&self, max_age: Duration, now: Instant) {
        self.entries.retain(|_, (_, start)| now.duration_since(*start) < max_age);
    }

    pub fn tracked(&self) -> usize {
        self.entries.len()
    }
}

/// Periodically drop limiter entries whose window has long expired.
pub fn spawn_cleanup(
    state: SharedState,
    every: Duration,
    max_age: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            state.submission_limiter.cleanup(max_age);
            tracing::debug!(
                "Rate limiter cleanup, {} clients tracked",
                state.submission_limiter.tracked()
            );
        }
    })
}
