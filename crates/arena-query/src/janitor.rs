use super::*;
use std::sync::Arc;
use tokio::time::interval;

/// Spawns a task sweeping `client` once per retention window.
///
/// Returns a `JoinHandle` that can be used to abort the task.
pub fn janitor<V>(client: Arc<QueryClient<V>>) -> tokio::task::JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let mut ticker = interval(client.policy().gc());
        ticker.tick().await;
        loop {
            ticker.tick().await;
            match client.sweep().await {
                0 => log::trace!("[janitor] nothing to evict"),
                n => log::debug!("[janitor] evicted {} entries", n),
            }
        }
    })
}
