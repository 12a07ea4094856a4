//! # AssignMaker Server Configuration
//!
//! File: cli/src/commands/serve/config.rs
//!
//! ## Overview
//!
//! This module turns `assignmaker serve` arguments into the final server and
//! mail settings. Values come from, in order of precedence:
//! 1. Command-line flags, or their environment variables (`PORT`, `EMAIL_USER`, ...)
//! 2. The config file (`--config`, or `./assignmaker.toml` if present)
//! 3. Default values
//!
//! ## Architecture
//!
//! 1. Parse command-line arguments (`ServeArgs`)
//! 2. Load the optional config file (`core::config::load_site_file`)
//! 3. Merge field by field
//! 4. Resolve and validate the asset directory
//! 5. Validate the mail settings
//!
//! ## Examples
//!
//! ```bash
//! # Everything from the environment, like a typical deployment
//! PORT=8080 EMAIL_USER=ops@example.com EMAIL_PASS=... assignmaker serve client/dist
//!
//! # Local relay without TLS
//! assignmaker serve --smtp-host 127.0.0.1 --smtp-port 1025 --smtp-tls none ./dist
//! ```
//!
use crate::core::config::{load_site_file, SiteFile};
use crate::core::error::Result;
use crate::mail::config::{MailConfig, TlsMode, DEFAULT_SMTP_HOST};
use anyhow::Context;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr};
use std::{env, path::PathBuf};
use tracing::{debug, warn};

/// Port used when neither `--port`, `PORT` nor the config file set one.
pub const DEFAULT_PORT: u16 = 5000;

/// # Serve Command Arguments (`ServeArgs`)
///
/// Every setting is optional here so that "not given" can be told apart from
/// "given with the default value" when merging with the config file.
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Directory holding the built site (index.html, assets/...).
    /// Defaults to `client/dist`.
    #[arg(env = "ASSIGNMAKER_ASSETS")]
    pub directory: Option<PathBuf>,

    /// Path to a config file. Defaults to `./assignmaker.toml` when present.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Port to listen on. Defaults to 5000.
    #[arg(long, short, env = "PORT")]
    pub port: Option<u16>,

    /// Address to bind. Defaults to 0.0.0.0 (all interfaces).
    #[arg(long, env = "ASSIGNMAKER_HOST")]
    pub host: Option<IpAddr>,

    /// Do not send CORS headers. CORS is permissive by default.
    #[arg(long)]
    pub no_cors: bool,

    /// File served for `/` and for client-side routes. Defaults to `index.html`.
    #[arg(long, short)]
    pub index: Option<String>,

    /// SMTP server. Defaults to smtp.gmail.com.
    #[arg(long, env = "SMTP_HOST")]
    pub smtp_host: Option<String>,

    /// SMTP port. Defaults to 587 for starttls, 465 for tls, 25 for none.
    #[arg(long, env = "SMTP_PORT")]
    pub smtp_port: Option<u16>,

    /// How the SMTP connection is secured.
    #[arg(long, env = "SMTP_TLS", value_enum)]
    pub smtp_tls: Option<TlsMode>,

    /// SMTP login of the site operator.
    #[arg(long, env = "EMAIL_USER")]
    pub email_user: Option<String>,

    /// SMTP password (an app password for Gmail).
    #[arg(long, env = "EMAIL_PASS", hide = true, hide_env_values = true)]
    pub email_pass: Option<String>,

    /// Inbox that receives contact messages. Defaults to the SMTP login.
    #[arg(long, env = "EMAIL_TO")]
    pub operator: Option<String>,
}

/// # HTTP Server Configuration (`ServerConfig`)
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub host: IpAddr,
    /// Absolute, canonical path of the built site once resolved.
    pub directory: PathBuf,
    pub enable_cors: bool,
    pub index_file: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            directory: PathBuf::from("client/dist"),
            enable_cors: true,
            index_file: "index.html".to_string(),
        }
    }
}

/// Everything `run_server` needs.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub server: ServerConfig,
    pub mail: MailConfig,
}

/// # Load and Merge Configuration (`load_and_merge_config`)
///
/// Produces the effective `ServeConfig` from `args` and the optional config
/// file.
///
/// ## Errors
///
/// Returns an error if:
/// - The config file is missing (when given explicitly), unreadable or invalid.
/// - The asset directory does not exist or is not a directory.
/// - Mail credentials are missing or the operator address is malformed.
pub async fn load_and_merge_config(args: ServeArgs) -> Result<ServeConfig> {
    let file = load_site_file(args.config.as_deref())?.unwrap_or_default();
    debug!("Config file settings: {:?}", file);

    let mut server = merge_server(&args, &file);
    server.resolve_directory().await?;

    let mail = merge_mail(args, file);
    mail.validate()?;

    Ok(ServeConfig { server, mail })
}

/// Flag/env value, else file value, else default.
fn merge_server(args: &ServeArgs, file: &SiteFile) -> ServerConfig {
    let defaults = ServerConfig::default();

    let host = match (args.host, file.server.host.as_deref()) {
        (Some(host), _) => host,
        (None, Some(host_str)) => host_str.parse().unwrap_or_else(|e| {
            warn!(
                "Invalid host IP '{}' in config file ({}), using default {}",
                host_str, e, defaults.host
            );
            defaults.host
        }),
        (None, None) => defaults.host,
    };

    ServerConfig {
        port: args.port.or(file.server.port).unwrap_or(defaults.port),
        host,
        directory: args
            .directory
            .clone()
            .or_else(|| file.server.directory.clone())
            .unwrap_or(defaults.directory),
        enable_cors: !args.no_cors && file.server.enable_cors.unwrap_or(defaults.enable_cors),
        index_file: args
            .index
            .clone()
            .or_else(|| file.server.index_file.clone())
            .unwrap_or(defaults.index_file),
    }
}

fn merge_mail(args: ServeArgs, file: SiteFile) -> MailConfig {
    let mail = file.mail;
    let tls = args.smtp_tls.or(mail.tls).unwrap_or_default();
    let username = args.email_user.or(mail.username).unwrap_or_default();

    MailConfig {
        smtp_host: args
            .smtp_host
            .or(mail.smtp_host)
            .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
        smtp_port: args
            .smtp_port
            .or(mail.smtp_port)
            .unwrap_or_else(|| tls.default_port()),
        tls,
        operator_address: args
            .operator
            .or(mail.operator_address)
            .unwrap_or_else(|| username.clone()),
        username,
        password: args.email_pass.or(mail.password).unwrap_or_default(),
    }
}

impl ServerConfig {
    /// # Resolve and Validate Directory Path (`resolve_directory`)
    ///
    /// Makes `directory` absolute and canonical, and checks that it is a
    /// directory.
    async fn resolve_directory(&mut self) -> Result<()> {
        let absolute_path = if self.directory.is_absolute() {
            self.directory.clone()
        } else {
            env::current_dir()
                .context("Failed to get current working directory")?
                .join(&self.directory)
        };

        let canonical_path = tokio::fs::canonicalize(&absolute_path)
            .await
            .with_context(|| {
                format!(
                    "Asset directory '{}' could not be found or accessed",
                    absolute_path.display()
                )
            })?;

        let metadata = tokio::fs::metadata(&canonical_path)
            .await
            .with_context(|| format!("Failed to get metadata for '{}'", canonical_path.display()))?;
        if !metadata.is_dir() {
            anyhow::bail!("Path is not a directory: {}", canonical_path.display());
        }

        self.directory = canonical_path;
        debug!("Resolved asset directory to: {}", self.directory.display());
        Ok(())
    }
}
