//! # Mail Relay
//!
//! File: cli/src/mail/relay.rs
//!
//! ## Overview
//!
//! The mail relay delivers a composed [`ContactEmail`]. The HTTP handler only
//! sees the [`MailRelay`] trait; production uses [`SmtpRelay`], an async SMTP
//! transport on Tokio authenticated with the operator's credentials.
//!
//! Dispatch failures are returned as [`MailDispatchError`]. The handler logs
//! the cause and answers the caller with a generic message.
//!
use super::config::{MailConfig, TlsMode};
use super::message::ContactEmail;
use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use thiserror::Error;
use tracing::{debug, info};

/// Why an email could not be handed to the mail server.
#[derive(Error, Debug)]
pub enum MailDispatchError {
    #[error("Invalid mailbox {0}")]
    Address(String),

    #[error("Could not build message: {0}")]
    Build(String),

    #[error("SMTP transport error: {0}")]
    Transport(String),
}

/// # Mail Relay (`MailRelay`)
///
/// Delivers one email. Implementations must be shareable across requests.
#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn dispatch(&self, email: &ContactEmail) -> Result<(), MailDispatchError>;
}

type TokioSmtp = AsyncSmtpTransport<Tokio1Executor>;

/// SMTP delivery through `lettre`.
pub struct SmtpRelay {
    transport: TokioSmtp,
}

impl SmtpRelay {
    /// Builds the transport from `config`. No connection is opened until the
    /// first dispatch.
    ///
    /// ## Panics
    ///
    /// The connection pool is spawned on the current Tokio runtime, so this
    /// must be called from within one.
    pub fn new(config: &MailConfig) -> Result<Self, MailDispatchError> {
        let host = config.smtp_host.as_str();
        let builder = match config.tls {
            TlsMode::Starttls => TokioSmtp::starttls_relay(host),
            TlsMode::Tls => TokioSmtp::relay(host),
            TlsMode::None => Ok(TokioSmtp::builder_dangerous(host)),
        }
        .map_err(|e| MailDispatchError::Transport(e.to_string()))?;

        let credentials = Credentials::new(config.username.clone(), config.password.clone());
        let transport = builder
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        info!(
            "SMTP relay configured for {}:{} ({})",
            config.smtp_host, config.smtp_port, config.tls
        );
        Ok(Self { transport })
    }
}

#[async_trait]
impl MailRelay for SmtpRelay {
    async fn dispatch(&self, email: &ContactEmail) -> Result<(), MailDispatchError> {
        let message = email.to_message()?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| MailDispatchError::Transport(e.to_string()))?;

        debug!("SMTP server accepted message: {:?}", response.code());
        Ok(())
    }
}
