//! Query cache policy and the cache that enforces it.
//!
//! A [`Policy`] is built once at start-up and handed to every
//! [`QueryClient`] by value; nothing here is global.
//!
//! - [`Policy`] — Freshness window, retention window, focus and retry rules
//! - [`QueryKey`] — Hierarchical cache key such as `teams` or `teams/<id>`
//! - [`QueryClient`] — Keyed cache serving fresh data and retrying failed fetches
//! - [`janitor`] — Background task evicting entries nobody reads anymore
mod client;
mod janitor;
mod key;
mod policy;

pub use client::*;
pub use janitor::*;
pub use key::*;
pub use policy::*;
