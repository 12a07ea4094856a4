//! # AssignMaker Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Backend for the AssignmentMaker website. The binary:
//! - loads a `.env` file from the working directory, if there is one
//! - parses command-line arguments with Clap
//! - sets up logging from the verbosity flags (or `RUST_LOG`)
//! - routes to the subcommand handlers
//!
//! ## Examples
//!
//! ```bash
//! # Run the site
//! EMAIL_USER=ops@example.com EMAIL_PASS=app-password assignmaker -v serve client/dist
//!
//! # Talk to the chat widget logic
//! assignmaker chat "hi there"
//!
//! # Send a contact form to a running site
//! assignmaker contact --name Asha --email asha@example.com \
//!     --contact 9876543210 --service "Essay"
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod chat; // Chat widget logic (reply selection, session)
mod commands; // Subcommand handlers
mod contact; // Contact form state, validation and submission
mod core; // Errors and config file
mod mail; // Mail relay used by the contact endpoint

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "assignmaker",
    about = "AssignmentMaker site backend: static site, contact mail relay, chat widget",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Available subcommands.
#[derive(Parser, Debug)]
enum Commands {
    /// Serve the website and the contact endpoint.
    #[command(alias = "s")]
    Serve(commands::serve::ServeArgs),
    /// Chat with the scripted assistant.
    Chat(commands::chat::ChatArgs),
    /// Validate and send a contact form to a running site.
    Contact(commands::contact::ContactArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loaded before parsing so clap's `env` fallbacks see the values.
    let dotenv_result = dotenvy::dotenv();
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    match dotenv_result {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => tracing::warn!("Ignoring .env file: {}", e),
    }

    let command_result = match cli.command {
        Commands::Serve(args) => commands::serve::handle_serve(args).await,
        Commands::Chat(args) => commands::chat::handle_chat(args).await,
        Commands::Contact(args) => commands::contact::handle_contact(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
