//! Core identity types, constants, and runtime helpers for arena.
//!
//! This crate provides the foundational types and configuration parameters
//! shared by every crate in the workspace.
#![allow(dead_code)]

// ============================================================================
// TRAITS
// ============================================================================
/// Unique identifier trait for domain entities.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
    /// Cast ID<T> to ID<U> while preserving the underlying UUID.
    pub fn cast<U>(self) -> ID<U> {
        ID {
            inner: self.inner,
            marker: PhantomData,
        }
    }
}

impl<T> From<ID<T>> for uuid::Uuid {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> TryFrom<&str> for ID<T> {
    type Error = uuid::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        uuid::Uuid::parse_str(s).map(Self::from)
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self {
            inner: uuid::Uuid::now_v7(),
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

/// Serialized as the bare UUID string so IDs travel unchanged through
/// tokens, fixtures, and JSON responses.
impl<T> serde::Serialize for ID<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.inner.serialize(serializer)
    }
}
impl<'de, T> serde::Deserialize<'de> for ID<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        uuid::Uuid::deserialize(deserializer).map(Self::from)
    }
}

// ============================================================================
// ENTITY MARKERS
// Listing entities live behind the catalog boundary; only their IDs are typed here.
// ============================================================================
/// A scheduled or completed match between two teams.
#[derive(Debug)]
pub enum Match {}
/// A registered competitor.
#[derive(Debug)]
pub enum Player {}
/// A roster of players. Members may belong to one.
#[derive(Debug)]
pub enum Team {}
/// A bracket or league of matches.
#[derive(Debug)]
pub enum Tournament {}

// ============================================================================
// ROUTING & SESSION PARAMETERS
// ============================================================================
/// Where unauthenticated visitors of protected pages are sent.
pub const SIGN_IN_PATH: &str = "/sign-in";
/// Where a browser lands after signing in with the form.
pub const DASHBOARD_PATH: &str = "/dashboard";
/// Where a browser lands after signing out with the form.
pub const HOME_PATH: &str = "/";
/// Cookie carrying the session token for browser requests.
pub const SESSION_COOKIE: &str = "arena.session";
/// Lifetime of an issued session token.
pub const ACCESS_TOKEN_DURATION: std::time::Duration = std::time::Duration::from_secs(24 * 60 * 60);

// ============================================================================
// QUERY CACHE POLICY
// Defaults for the listing cache; see `arena_query::Policy`.
// ============================================================================
/// Cached data younger than this is served without refetching.
pub const QUERY_STALE_TIME: std::time::Duration = std::time::Duration::from_millis(60_000);
/// Cached data unused for longer than this is evicted.
pub const QUERY_GC_TIME: std::time::Duration = std::time::Duration::from_millis(300_000);
/// Automatic retries after a failed fetch.
pub const QUERY_RETRY: usize = 1;
/// Whether regaining window focus marks cached data for refetch.
pub const QUERY_REFETCH_ON_WINDOW_FOCUS: bool = false;
/// First retry delay; doubles per attempt.
pub const QUERY_RETRY_DELAY: std::time::Duration = std::time::Duration::from_secs(1);
/// Ceiling on the doubling retry delay.
pub const QUERY_RETRY_DELAY_MAX: std::time::Duration = std::time::Duration::from_secs(30);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        println!();
        log::warn!("interrupt received, exiting immediately");
        std::process::exit(0);
    });
}
