//! # AssignMaker Site Server
//!
//! File: cli/src/commands/serve/mod.rs
//!
//! ## Overview
//!
//! `assignmaker serve` runs the website: it serves the built static site and
//! exposes the one backend route, `POST /api/contact`, which turns a contact
//! form submission into an email to the operator.
//!
//! ## Architecture
//!
//! - `config.rs`: flags, environment and config file merged into `ServeConfig`
//! - `handlers.rs`: the contact route
//! - `server_logic.rs`: router, binding, graceful shutdown
//! - `utils.rs`: startup diagnostics for the asset directory
//!
//! ## Examples
//!
//! ```bash
//! EMAIL_USER=ops@example.com EMAIL_PASS=app-password assignmaker serve client/dist
//! assignmaker serve --port 8080 --config deploy/assignmaker.toml
//! ```
//!
use crate::core::error::Result;
use tracing::info;

pub use config::ServeArgs;

/// Configuration loading and merging.
pub mod config;

/// `POST /api/contact`.
pub mod handlers;

/// Axum server setup.
pub mod server_logic;

/// Asset directory diagnostics.
pub mod utils;

/// # Handle Serve Command (`handle_serve`)
///
/// Loads the effective configuration and runs the server until shutdown.
pub async fn handle_serve(args: ServeArgs) -> Result<()> {
    info!("Handling serve command");

    let config = config::load_and_merge_config(args).await?;
    info!("Effective server config: {:?}", config);

    server_logic::run_server(config).await?;
    Ok(())
}
