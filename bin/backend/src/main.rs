//! Arena Backend Binary
//!
//! Serves the public pages, the signed-in pages, and the session API.
//! Configured by flags or environment, see `backend --help`.
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = arena_server::Settings::parse();
    arena_core::log();
    arena_core::kys();
    arena_server::run(settings).await
}
