use super::*;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::RwLock;
use tokio::time::Instant;

struct Entry<V> {
    value: V,
    updated: Instant,
    touched: Instant,
    invalidated: bool,
}

impl<V> Entry<V> {
    fn new(value: V) -> Self {
        let now = Instant::now();
        Self {
            value,
            updated: now,
            touched: now,
            invalidated: false,
        }
    }
}

/// Keyed cache for fetched data, governed by a [`Policy`].
///
/// Fresh entries are served without calling the fetcher. Stale or missing
/// entries are fetched, retried up to `policy.retry()` times with
/// exponential back-off. A failed refetch keeps the previous value around
/// for [`QueryClient::peek`]. At most one fetch per key is in flight;
/// concurrent callers wait for it and share its result.
pub struct QueryClient<V> {
    policy: Policy,
    entries: RwLock<HashMap<QueryKey, Entry<V>>>,
    flights: Mutex<HashMap<QueryKey, Arc<Mutex<()>>>>,
}

impl<V> QueryClient<V>
where
    V: Clone,
{
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            entries: RwLock::new(HashMap::new()),
            flights: Mutex::new(HashMap::new()),
        }
    }
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub async fn fetch<F, Fut>(&self, key: impl Into<QueryKey>, fetcher: F) -> anyhow::Result<V>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = anyhow::Result<V>>,
    {
        let key = key.into();
        if let Some(value) = self.fresh(&key).await {
            log::trace!("[query {}] served from cache", key);
            return Ok(value);
        }
        let flight = self.flight(&key).await;
        let _landing = flight.lock().await;
        if let Some(value) = self.fresh(&key).await {
            log::trace!("[query {}] filled by a concurrent fetch", key);
            return Ok(value);
        }
        let mut attempt = 0;
        loop {
            match fetcher().await {
                Ok(value) => {
                    log::debug!("[query {}] fetched", key);
                    self.set(key, value.clone()).await;
                    return Ok(value);
                }
                Err(e) if attempt < self.policy.retry() => {
                    let delay = self.policy.backoff(attempt);
                    log::warn!("[query {}] fetch failed, retrying in {:?}: {}", key, delay, e);
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    log::error!("[query {}] fetch failed after {} attempts: {}", key, attempt + 1, e);
                    return Err(e);
                }
            }
        }
    }

    /// Cached value regardless of freshness.
    pub async fn peek(&self, key: impl Into<QueryKey>) -> Option<V> {
        let mut entries = self.entries.write().await;
        let entry = entries.get_mut(&key.into())?;
        entry.touched = Instant::now();
        Some(entry.value.clone())
    }

    /// Replaces the cached value, e.g. after a local mutation.
    pub async fn set(&self, key: impl Into<QueryKey>, value: V) {
        self.entries
            .write()
            .await
            .insert(key.into(), Entry::new(value));
    }

    /// Marks every entry at or beneath `prefix` stale. Returns how many.
    pub async fn invalidate(&self, prefix: impl Into<QueryKey>) -> usize {
        let ref prefix = prefix.into();
        self.entries
            .write()
            .await
            .iter_mut()
            .filter(|(key, _)| key.starts_with(prefix))
            .fold(0, |n, (_, entry)| {
                entry.invalidated = true;
                n + 1
            })
    }

    /// Window focus regained. Marks everything stale only if the policy asks
    /// for refetch-on-focus; returns how many entries were marked.
    pub async fn focus(&self) -> usize {
        if !self.policy.refetch_on_window_focus() {
            return 0;
        }
        self.entries
            .write()
            .await
            .values_mut()
            .fold(0, |n, entry| {
                entry.invalidated = true;
                n + 1
            })
    }

    /// Evicts entries unread for longer than the retention window.
    pub async fn sweep(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !self.policy.is_expired(entry.touched.elapsed()));
        self.flights
            .lock()
            .await
            .retain(|key, flight| entries.contains_key(key) || Arc::strong_count(flight) > 1);
        before - entries.len()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    async fn flight(&self, key: &QueryKey) -> Arc<Mutex<()>> {
        self.flights
            .lock()
            .await
            .entry(key.clone())
            .or_default()
            .clone()
    }

    async fn fresh(&self, key: &QueryKey) -> Option<V> {
        let mut entries = self.entries.write().await;
        let entry = entries.get_mut(key)?;
        entry.touched = Instant::now();
        let fresh = !entry.invalidated && self.policy.is_fresh(entry.updated.elapsed());
        fresh.then(|| entry.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    fn client() -> QueryClient<Vec<u32>> {
        QueryClient::new(Policy::default())
    }

    #[tokio::test(start_paused = true)]
    async fn fresh_entries_skip_the_fetcher() {
        let client = client();
        let ref calls = AtomicUsize::new(0);
        let fetcher = move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![1, 2, 3])
        };
        assert!(client.fetch("teams", fetcher).await.unwrap() == vec![1, 2, 3]);
        tokio::time::advance(Duration::from_millis(59_999)).await;
        client.fetch("teams", fetcher).await.unwrap();
        assert!(calls.load(Ordering::SeqCst) == 1);
        tokio::time::advance(Duration::from_millis(1)).await;
        client.fetch("teams", fetcher).await.unwrap();
        assert!(calls.load(Ordering::SeqCst) == 2);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_misses_share_one_fetch() {
        let client = client();
        let ref calls = AtomicUsize::new(0);
        let fetcher = move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_secs(1)).await;
            Ok(vec![5])
        };
        let (a, b, c) = tokio::join!(
            client.fetch("teams", fetcher),
            client.fetch("teams", fetcher),
            client.fetch("teams", fetcher),
        );
        assert!(a.unwrap() == vec![5]);
        assert!(b.unwrap() == vec![5]);
        assert!(c.unwrap() == vec![5]);
        assert!(calls.load(Ordering::SeqCst) == 1);
    }

    #[tokio::test(start_paused = true)]
    async fn distinct_keys_fetch_independently() {
        let client = client();
        let ref calls = AtomicUsize::new(0);
        let fetcher = move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_secs(1)).await;
            Ok(vec![])
        };
        let _ = tokio::join!(client.fetch("teams", fetcher), client.fetch("players", fetcher));
        assert!(calls.load(Ordering::SeqCst) == 2);
    }

    #[tokio::test(start_paused = true)]
    async fn unused_entries_are_evicted() {
        let client = client();
        client.fetch("matches", || async { Ok(vec![7]) }).await.unwrap();
        tokio::time::advance(Duration::from_millis(300_000)).await;
        assert!(client.sweep().await == 0);
        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(client.sweep().await == 1);
        assert!(client.peek("matches").await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn reads_keep_entries_alive() {
        let client = client();
        client.set("players", vec![1]).await;
        tokio::time::advance(Duration::from_secs(200)).await;
        assert!(client.peek("players").await.is_some());
        tokio::time::advance(Duration::from_secs(200)).await;
        assert!(client.sweep().await == 0);
        assert!(client.len().await == 1);
    }

    #[tokio::test(start_paused = true)]
    async fn focus_never_refetches_by_default() {
        let client = client();
        let ref calls = AtomicUsize::new(0);
        let fetcher = move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        };
        client.fetch("tournaments", fetcher).await.unwrap();
        assert!(client.focus().await == 0);
        client.fetch("tournaments", fetcher).await.unwrap();
        assert!(calls.load(Ordering::SeqCst) == 1);
    }

    #[tokio::test(start_paused = true)]
    async fn focus_refetches_when_enabled() {
        let client = QueryClient::new(Policy::default().with_refetch_on_window_focus(true));
        let ref calls = AtomicUsize::new(0);
        let fetcher = move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![0u32])
        };
        client.fetch("tournaments", fetcher).await.unwrap();
        assert!(client.focus().await == 1);
        client.fetch("tournaments", fetcher).await.unwrap();
        assert!(calls.load(Ordering::SeqCst) == 2);
    }

    #[tokio::test(start_paused = true)]
    async fn retries_exactly_once() {
        let client = client();
        let ref calls = AtomicUsize::new(0);
        let result = client
            .fetch("teams", move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err::<Vec<u32>, _>(anyhow::anyhow!("upstream down"))
            })
            .await;
        assert!(result.is_err());
        assert!(calls.load(Ordering::SeqCst) == 2);
    }

    #[tokio::test(start_paused = true)]
    async fn retry_can_recover() {
        let client = client();
        let ref calls = AtomicUsize::new(0);
        let result = client
            .fetch("teams", move || async move {
                match calls.fetch_add(1, Ordering::SeqCst) {
                    0 => Err(anyhow::anyhow!("blip")),
                    _ => Ok(vec![9]),
                }
            })
            .await;
        assert!(result.unwrap() == vec![9]);
        assert!(calls.load(Ordering::SeqCst) == 2);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_refetch_keeps_stale_value() {
        let client = client();
        client.set("teams", vec![4]).await;
        client.invalidate("teams").await;
        let result = client
            .fetch("teams", || async { Err(anyhow::anyhow!("down")) })
            .await;
        assert!(result.is_err());
        assert!(client.peek("teams").await == Some(vec![4]));
    }

    #[tokio::test(start_paused = true)]
    async fn invalidation_follows_prefixes() {
        let client = client();
        client.set(["teams", "a"], vec![1]).await;
        client.set(["teams", "b"], vec![2]).await;
        client.set("players", vec![3]).await;
        assert!(client.invalidate("teams").await == 2);
        let ref calls = AtomicUsize::new(0);
        let fetcher = move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![0])
        };
        client.fetch("players", fetcher).await.unwrap();
        client.fetch(["teams", "a"], fetcher).await.unwrap();
        assert!(calls.load(Ordering::SeqCst) == 1);
    }
}
