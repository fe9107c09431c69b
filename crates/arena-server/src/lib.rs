//! Arena web server.
//!
//! Wires the session layer, the listing cache, and the page routes into a
//! single actix-web server.
//!
//! - [`Settings`] — flags and environment configuration
//! - [`State`] — shared handles built once at start-up
//! - [`routes`] — every HTTP route
//! - [`run`] — bind and serve
mod settings;

pub use settings::*;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::dev::Server;
use actix_web::web;
use arena_auth::Crypto;
use arena_auth::Directory;
use arena_auth::Resolver;
use arena_auth::Revocations;
use arena_auth::Roster;
use arena_auth::Tokens;
use arena_pages::Catalog;
use arena_pages::Fixtures;
use arena_pages::Listings;
use arena_query::Policy;
use std::sync::Arc;
use tokio::task::JoinHandle;

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Shared handles, built once and cloned into every worker.
#[derive(Clone)]
pub struct State {
    tokens: web::Data<Tokens>,
    resolver: web::Data<dyn Resolver>,
    directory: web::Data<dyn Directory>,
    catalog: web::Data<dyn Catalog>,
    listings: web::Data<Listings>,
}

impl State {
    pub fn new(
        tokens: Tokens,
        directory: Arc<dyn Directory>,
        catalog: Arc<dyn Catalog>,
        listings: Arc<Listings>,
    ) -> Self {
        let tokens = Arc::new(tokens);
        Self {
            resolver: web::Data::from(tokens.clone() as Arc<dyn Resolver>),
            tokens: web::Data::from(tokens),
            directory: web::Data::from(directory),
            catalog: web::Data::from(catalog),
            listings: web::Data::from(listings),
        }
    }
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let tokens = Tokens::new(
            Crypto::new(settings.secret.as_bytes()),
            Arc::new(Revocations::default()),
        )
        .secure(settings.secure_cookies);
        let roster = match settings.roster {
            Some(ref path) => Roster::load(path)?,
            None => Roster::default(),
        };
        if roster.is_empty() {
            log::warn!("member roster is empty, sign-in will reject everyone");
        }
        let fixtures = match settings.catalog {
            Some(ref path) => Fixtures::load(path)?,
            None => {
                log::warn!("no catalog configured, listings will be empty");
                Fixtures::default()
            }
        };
        Ok(Self::new(
            tokens,
            Arc::new(roster),
            Arc::new(fixtures),
            Arc::new(Listings::new(settings.policy())),
        ))
    }
    pub fn listings(&self) -> Arc<Listings> {
        self.listings.clone().into_inner()
    }
    /// Registers the shared handles as app data.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.tokens.clone())
            .app_data(self.resolver.clone())
            .app_data(self.directory.clone())
            .app_data(self.catalog.clone())
            .app_data(self.listings.clone());
    }
}

#[rustfmt::skip]
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health))
        .service(
            web::scope("/auth")
                .route("/sign-in",  web::post().to(arena_auth::sign_in))
                .route("/sign-out", web::post().to(arena_auth::sign_out))
                .route("/session",  web::get().to(arena_auth::session)),
        )
        .configure(arena_pages::configure);
}

pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let state = State::from_settings(&settings)?;
    let janitor = arena_query::janitor(state.listings());
    log::info!("starting arena server on {}", settings.bind);
    let server = HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .configure(|cfg| state.register(cfg))
            .configure(routes)
    })
    .workers(settings.workers)
    .bind(&settings.bind)?
    .run();
    serve(server, janitor).await
}

/// Drives the server alongside the cache janitor. If the janitor dies the
/// server is stopped gracefully and the failure is reported.
pub async fn serve(server: Server, mut janitor: JoinHandle<()>) -> anyhow::Result<()> {
    let handle = server.handle();
    tokio::pin!(server);
    tokio::select! {
        result = &mut server => {
            janitor.abort();
            result?;
            log::info!("arena server stopped");
            Ok(())
        }
        joined = &mut janitor => {
            log::error!("cache janitor exited ({:?}), stopping server", joined);
            handle.stop(true).await;
            server.await?;
            anyhow::bail!("cache janitor exited")
        }
    }
}
