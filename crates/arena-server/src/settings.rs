use arena_query::Policy;
use std::path::PathBuf;
use std::time::Duration;

/// Process configuration. Every flag falls back to an environment variable.
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "backend", about = "Arena league web server")]
pub struct Settings {
    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8080")]
    pub bind: String,
    /// HMAC secret for session tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub secret: String,
    /// Actix worker threads
    #[arg(long, env = "WORKERS", default_value_t = 4)]
    pub workers: usize,
    /// JSON member roster used by sign-in
    #[arg(long, env = "ROSTER_PATH")]
    pub roster: Option<PathBuf>,
    /// JSON catalog fixtures for the listing pages
    #[arg(long, env = "CATALOG_PATH")]
    pub catalog: Option<PathBuf>,
    /// Mark session cookies Secure
    #[arg(long, env = "SECURE_COOKIES")]
    pub secure_cookies: bool,
    /// Milliseconds a cached listing is served without refetching
    #[arg(long, env = "QUERY_STALE_MS", default_value_t = arena_core::QUERY_STALE_TIME.as_millis() as u64)]
    pub stale_ms: u64,
    /// Milliseconds an unread listing stays cached
    #[arg(long, env = "QUERY_GC_MS", default_value_t = arena_core::QUERY_GC_TIME.as_millis() as u64)]
    pub gc_ms: u64,
    /// Retries after a failed listing fetch
    #[arg(long, env = "QUERY_RETRY", default_value_t = arena_core::QUERY_RETRY)]
    pub retry: usize,
}

impl Settings {
    /// Listing cache rules, built once at start-up.
    pub fn policy(&self) -> Policy {
        Policy::default()
            .with_stale(Duration::from_millis(self.stale_ms))
            .with_gc(Duration::from_millis(self.gc_ms))
            .with_retry(self.retry)
    }
}
