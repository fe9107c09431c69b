//! Sessions, roles, tokens, and identity resolution.
//!
//! A single owned identity schema ([`Member`]) is shared by the user record,
//! the resolved [`Session`], and the signed [`Claims`] token, so the role and
//! team of a visitor look the same to every layer that reads them.
//!
//! ## Identity Types
//!
//! - [`Role`] — Closed access-level enumeration; only `ADMIN` grants admin actions
//! - [`Member`] — User record: id, email, optional name, role, optional team
//! - [`Session`] — Server-validated identity for the current request
//! - [`Claims`] — JWT payload carrying the same fields as [`Member`]
//!
//! ## Resolution
//!
//! - [`Resolver`] — Injected capability turning a credential into a session
//! - [`Tokens`] — JWT-backed resolver and issuer with revocation
//! - [`Directory`] — Credential lookup and argon2 verification, [`Roster`] in memory
//!
//! ## Security
//!
//! - [`Crypto`] — JWT signing and verification
mod claims;
mod crypto;
mod dto;
mod error;
mod member;
mod resolver;
mod revocations;
mod role;
mod roster;
mod session;

pub use claims::*;
pub use crypto::*;
pub use dto::*;
pub use error::*;
pub use member::*;
pub use resolver::*;
pub use revocations::*;
pub use role::*;
pub use roster::*;
pub use session::*;

#[cfg(feature = "server")]
mod extract;
#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
pub use extract::*;
#[cfg(feature = "server")]
pub use handlers::*;
