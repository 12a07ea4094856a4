//! # Mail Transport Configuration
//!
//! File: cli/src/mail/config.rs
//!
//! ## Overview
//!
//! `MailConfig` carries everything the SMTP relay needs: server, TLS mode,
//! operator credentials and the inbox that receives contact messages. It is
//! assembled once by the `serve` command (flags, environment, config file)
//! and handed to `SmtpRelay::new`; the relay itself never reads the
//! environment.
//!
use crate::core::error::{Result, SiteError};
use lettre::message::Mailbox;
use serde::Deserialize;
use std::fmt;

/// Default SMTP server, matching the operator's Gmail account setup.
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// How the SMTP connection is secured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    /// Plain connection upgraded with STARTTLS (submission port 587).
    #[default]
    Starttls,
    /// Implicit TLS from the first byte (port 465).
    Tls,
    /// No encryption. Only for local test relays.
    None,
}

impl TlsMode {
    pub fn default_port(self) -> u16 {
        match self {
            TlsMode::Starttls => 587,
            TlsMode::Tls => 465,
            TlsMode::None => 25,
        }
    }
}

impl fmt::Display for TlsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TlsMode::Starttls => "starttls",
            TlsMode::Tls => "tls",
            TlsMode::None => "none",
        };
        f.write_str(name)
    }
}

/// Settings for the outbound mail transport.
#[derive(Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub tls: TlsMode,
    /// SMTP login, also the default operator address.
    pub username: String,
    pub password: String,
    /// Where contact messages are delivered.
    pub operator_address: String,
}

impl MailConfig {
    /// Checks that credentials are present and the operator address parses.
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            let reason = "Mail username is not set (use --email-user or EMAIL_USER)";
            return Err(SiteError::Config(reason.into()).into());
        }
        if self.password.is_empty() {
            let reason = "Mail password is not set (use EMAIL_PASS)";
            return Err(SiteError::Config(reason.into()).into());
        }
        self.operator_address.parse::<Mailbox>().map_err(|e| {
            SiteError::Config(format!(
                "Invalid operator address '{}': {}",
                self.operator_address, e
            ))
        })?;
        Ok(())
    }
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("tls", &self.tls)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("operator_address", &self.operator_address)
            .finish()
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MailConfig {
        MailConfig {
            smtp_host: DEFAULT_SMTP_HOST.into(),
            smtp_port: 587,
            tls: TlsMode::Starttls,
            username: "ops@example.com".into(),
            password: "app-password".into(),
            operator_address: "ops@example.com".into(),
        }
    }

    #[test]
    fn test_default_ports() {
        assert_eq!(TlsMode::Starttls.default_port(), 587);
        assert_eq!(TlsMode::Tls.default_port(), 465);
        assert_eq!(TlsMode::None.default_port(), 25);
        assert_eq!(TlsMode::default(), TlsMode::Starttls);
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_credentials() {
        let no_user = MailConfig {
            username: " ".into(),
            ..sample()
        };
        assert!(no_user.validate().unwrap_err().to_string().contains("EMAIL_USER"));

        let no_pass = MailConfig {
            password: String::new(),
            ..sample()
        };
        assert!(no_pass.validate().unwrap_err().to_string().contains("EMAIL_PASS"));
    }

    #[test]
    fn test_validate_rejects_bad_operator_address() {
        let config = MailConfig {
            operator_address: "not an address".into(),
            ..sample()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_hides_password() {
        let rendered = format!("{:?}", sample());
        assert!(!rendered.contains("app-password"));
        assert!(rendered.contains("ops@example.com"));
    }
}
