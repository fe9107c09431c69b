use std::time::Duration;

/// Caching rules for listing fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    stale: Duration,
    gc: Duration,
    refetch_on_window_focus: bool,
    retry: usize,
    delay: Duration,
    delay_max: Duration,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            stale: arena_core::QUERY_STALE_TIME,
            gc: arena_core::QUERY_GC_TIME,
            refetch_on_window_focus: arena_core::QUERY_REFETCH_ON_WINDOW_FOCUS,
            retry: arena_core::QUERY_RETRY,
            delay: arena_core::QUERY_RETRY_DELAY,
            delay_max: arena_core::QUERY_RETRY_DELAY_MAX,
        }
    }
}

impl Policy {
    pub fn with_stale(self, stale: Duration) -> Self {
        Self { stale, ..self }
    }
    pub fn with_gc(self, gc: Duration) -> Self {
        Self { gc, ..self }
    }
    pub fn with_retry(self, retry: usize) -> Self {
        Self { retry, ..self }
    }
    pub fn with_refetch_on_window_focus(self, refetch_on_window_focus: bool) -> Self {
        Self {
            refetch_on_window_focus,
            ..self
        }
    }
    pub fn stale(&self) -> Duration {
        self.stale
    }
    pub fn gc(&self) -> Duration {
        self.gc
    }
    pub fn retry(&self) -> usize {
        self.retry
    }
    pub fn refetch_on_window_focus(&self) -> bool {
        self.refetch_on_window_focus
    }
    /// Data fetched `age` ago may be served without refetching.
    pub fn is_fresh(&self, age: Duration) -> bool {
        age < self.stale
    }
    /// Data unread for `idle` may be evicted.
    pub fn is_expired(&self, idle: Duration) -> bool {
        idle > self.gc
    }
    /// Delay before retry number `attempt` (zero-based), doubling up to a ceiling.
    pub fn backoff(&self, attempt: usize) -> Duration {
        self.delay
            .saturating_mul(1u32 << attempt.min(31))
            .min(self.delay_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_listing_rules() {
        let policy = Policy::default();
        assert!(policy.stale() == Duration::from_millis(60_000));
        assert!(policy.gc() == Duration::from_millis(300_000));
        assert!(policy.retry() == 1);
        assert!(!policy.refetch_on_window_focus());
    }

    #[test]
    fn freshness_boundary_is_exclusive() {
        let policy = Policy::default();
        assert!(policy.is_fresh(Duration::from_millis(59_999)));
        assert!(!policy.is_fresh(Duration::from_millis(60_000)));
    }

    #[test]
    fn eviction_requires_strictly_longer_idle() {
        let policy = Policy::default();
        assert!(!policy.is_expired(Duration::from_millis(300_000)));
        assert!(policy.is_expired(Duration::from_millis(300_001)));
    }

    #[test]
    fn backoff_doubles_then_caps() {
        let policy = Policy::default();
        assert!(policy.backoff(0) == Duration::from_secs(1));
        assert!(policy.backoff(1) == Duration::from_secs(2));
        assert!(policy.backoff(4) == Duration::from_secs(16));
        assert!(policy.backoff(5) == Duration::from_secs(30));
        assert!(policy.backoff(64) == Duration::from_secs(30));
    }
}
