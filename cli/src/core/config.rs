//! # AssignMaker Configuration File
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module reads the optional `assignmaker.toml` configuration file. The
//! file supplies defaults for the `serve` command that sit between the
//! built-in values and the command-line / environment settings:
//!
//! 1. Command-line flags and environment variables (highest priority)
//! 2. `assignmaker.toml` (explicit `--config` path, or the current directory)
//! 3. Built-in defaults (lowest priority)
//!
//! Merging happens in `commands::serve::config`; this module only finds,
//! reads and parses the file.
//!
//! ## Examples
//!
//! ```toml
//! [server]
//! port = 8080
//! host = "127.0.0.1"
//! directory = "client/dist"   # relative to this file
//! enable_cors = true
//! index_file = "index.html"
//!
//! [mail]
//! smtp_host = "smtp.gmail.com"
//! smtp_port = 587
//! tls = "starttls"
//! username = "operator@example.com"
//! operator_address = "inbox@example.com"
//! ```
//!
use crate::core::error::{Result, SiteError};
use crate::mail::config::TlsMode;
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name looked up in the current directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "assignmaker.toml";

/// Top-level layout of `assignmaker.toml`. Every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SiteFile {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub mail: MailSection,
}

/// `[server]` table.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    pub port: Option<u16>,
    /// Kept as a string so an invalid address produces a readable error.
    pub host: Option<String>,
    /// Static asset directory. Relative paths are resolved against the file's directory.
    pub directory: Option<PathBuf>,
    pub enable_cors: Option<bool>,
    pub index_file: Option<String>,
}

/// `[mail]` table.
#[derive(Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MailSection {
    pub smtp_host: Option<String>,
    pub smtp_port: Option<u16>,
    pub tls: Option<TlsMode>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub operator_address: Option<String>,
}

impl std::fmt::Debug for MailSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailSection")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("tls", &self.tls)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("operator_address", &self.operator_address)
            .finish()
    }
}

/// # Load Site File (`load_site_file`)
///
/// Finds and parses the configuration file.
///
/// * With `explicit = Some(path)`, the file must exist; a missing file is a
///   configuration error.
/// * With `explicit = None`, `./assignmaker.toml` is used if present and
///   `Ok(None)` is returned otherwise.
///
/// A relative `server.directory` is rewritten to be relative to the file's
/// parent directory, so the file can be used from any working directory.
///
/// ## Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or
/// contains keys this version does not know.
pub fn load_site_file(explicit: Option<&Path>) -> Result<Option<SiteFile>> {
    let config_path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(SiteError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                ))
                .into());
            }
            path.to_path_buf()
        }
        None => {
            let candidate = std::env::current_dir()
                .context("Failed to get current working directory")?
                .join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                debug!("No config file found at {}", candidate.display());
                return Ok(None);
            }
            candidate
        }
    };

    info!("Loading configuration from {}", config_path.display());
    parse_site_file(&config_path).map(Some)
}

/// Reads and parses one config file, resolving the asset directory against it.
fn parse_site_file(config_path: &Path) -> Result<SiteFile> {
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    let mut site_file: SiteFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    if let Some(dir) = site_file.server.directory.take() {
        let resolved = match config_path.parent() {
            Some(parent) if dir.is_relative() => parent.join(dir),
            _ => dir,
        };
        debug!("Asset directory from config file: {}", resolved.display());
        site_file.server.directory = Some(resolved);
    }

    Ok(site_file)
}
