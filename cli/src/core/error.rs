//! # AssignMaker Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the application-level error categories used by the
//! `assignmaker` binary. Component-specific failures have their own enums
//! close to the code that raises them (`SubmitError` and `TransportError` in
//! `contact::submit`, `MailDispatchError` in `mail::relay`); they are folded
//! into `SiteError` when they need to cross a command boundary.
//!
//! ## Architecture
//!
//! - `SiteError`: a `thiserror` enum naming the failure category
//! - `Result<T>`: an alias for `anyhow::Result<T>` so handlers can attach context
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if config.mail.username.is_empty() {
//!     return Err(SiteError::Config("EMAIL_USER is not set".into()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read config file: {}", path.display()))?;
//! ```
//!
use crate::contact::submit::{SubmitError, TransportError};
use crate::mail::relay::MailDispatchError;
use thiserror::Error;

/// Custom error type for the AssignMaker application.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid form: {0}")]
    Validation(String),

    #[error("Could not reach the contact endpoint: {source}")]
    Transport {
        #[from]
        source: TransportError,
    },

    #[error("Mail dispatch failed: {source}")]
    MailDispatch {
        #[from]
        source: MailDispatchError,
    },

    #[error("Contact submission failed: {source}")]
    Submit {
        #[from]
        source: SubmitError,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
