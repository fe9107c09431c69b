//! Layouts, route guard, and role-gated listing pages.
//!
//! Every page renders inside one of three [`Shell`]s:
//!
//! - public — fixed header and footer, no session check
//! - resource — public chrome plus tabs across the four listings
//! - app — signed-in chrome; reached only through the [`protect`] guard
//!
//! ## Listings
//!
//! - [`Resource`] — matches, players, teams, tournaments
//! - [`PageClient`] — listing component; admin actions only when `is_admin`
//! - [`Catalog`] — collaborator serving listing rows, [`Fixtures`] from disk
//! - [`Listings`] — query cache in front of the catalog
//!
//! ## HTTP Handlers
//!
//! [`configure`] mounts every page route on an actix-web app.
mod catalog;
mod client;
mod guard;
pub mod handlers;
mod markup;
mod page;
mod resource;
mod shell;

pub use catalog::*;
pub use client::*;
pub use guard::*;
pub use markup::*;
pub use page::*;
pub use resource::*;
pub use shell::*;

use actix_web::middleware::from_fn;
use actix_web::web;

/// Query cache holding one listing per resource.
pub type Listings = arena_query::QueryClient<Vec<Record>>;

#[rustfmt::skip]
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/",            web::get().to(handlers::home))
        .route("/about",       web::get().to(handlers::about))
        .route("/sign-in",     web::get().to(handlers::sign_in))
        .route("/matches",     web::get().to(handlers::matches))
        .route("/players",     web::get().to(handlers::players))
        .route("/teams",       web::get().to(handlers::teams))
        .route("/tournaments", web::get().to(handlers::tournaments))
        .service(web::resource("/dashboard").wrap(from_fn(protect)).route(web::get().to(handlers::dashboard)))
        .service(web::resource("/profile").wrap(from_fn(protect)).route(web::get().to(handlers::profile)));
}
