//! # AssignMaker HTTP Server Implementation
//!
//! File: cli/src/commands/serve/server_logic.rs
//!
//! ## Overview
//!
//! The site server built on Axum:
//! - `POST /api/contact`: the contact mail relay (see `handlers`)
//! - everything else: files from the built site, falling back to the index
//!   file so client-side routes such as `/service` and `/contact` load
//! - permissive CORS (unless disabled) and request tracing
//! - graceful shutdown on Ctrl+C / SIGTERM
//!
//! ## Examples
//!
//! ```rust
//! let config = config::load_and_merge_config(args).await?;
//! server_logic::run_server(config).await?;
//! ```
//!
use super::config::{ServeConfig, ServerConfig};
use super::handlers::{self, AppState};
use super::utils;
use crate::contact::submit::CONTACT_PATH;
use crate::core::error::{Result, SiteError};
use crate::mail::SmtpRelay;
use anyhow::Context;
use axum::routing::post;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

/// # Run HTTP Server (`run_server`)
///
/// Builds the SMTP relay and router from `config`, binds the configured
/// address once and serves until a shutdown signal arrives.
///
/// ## Errors
///
/// - The SMTP transport cannot be constructed from the mail settings.
/// - The address cannot be bound (port in use, permissions).
/// - The server fails while running.
pub async fn run_server(config: ServeConfig) -> Result<()> {
    let addr = SocketAddr::new(config.server.host, config.server.port);

    let assets = utils::summarize_assets(&config.server.directory, &config.server.index_file);
    if !assets.has_index {
        warn!(
            "Index file '{}' not found in {}; client-side routes will return 404",
            config.server.index_file,
            config.server.directory.display()
        );
    }

    let relay = SmtpRelay::new(&config.mail).map_err(SiteError::from)?;
    let state = AppState::new(Arc::new(relay), &config.mail.operator_address);
    let app = create_app(&config.server, state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    println!("\n=================================================================");
    println!("📂 Serving site from:  {}", config.server.directory.display());
    println!("🌐 Local URL:          http://localhost:{}", addr.port());
    println!("⚙️  Binding to address: {}", addr);
    println!("✉️  Contact endpoint:   POST {}", CONTACT_PATH);
    println!("📮 Delivering to:      {}", config.mail.operator_address);
    println!("🔒 CORS enabled:       {}", config.server.enable_cors);
    println!("=================================================================\n");

    info!(
        "Server running on {} ({} files, {} directories in site root)",
        addr, assets.files, assets.directories
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// # Create Axum Application (`create_app`)
///
/// The contact route plus the static site, wrapped in tracing and CORS layers.
pub fn create_app(config: &ServerConfig, state: AppState) -> Router {
    let cors_layer = if config.enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(false))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Unknown paths get the index file so the client router can take over.
    let site = ServeDir::new(&config.directory)
        .fallback(ServeFile::new(config.directory.join(&config.index_file)));

    Router::new()
        .route(CONTACT_PATH, post(handlers::submit_contact))
        .fallback_service(site)
        .with_state(state)
        .layer(ServiceBuilder::new().layer(trace_layer).layer(cors_layer))
}
