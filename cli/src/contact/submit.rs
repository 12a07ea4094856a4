//! # Contact Form Submission
//!
//! File: cli/src/contact/submit.rs
//!
//! ## Overview
//!
//! Sends a validated contact form to the mail relay (`POST /api/contact`).
//!
//! The outbound call sits behind the [`ContactTransport`] trait so the form
//! logic can be driven by the real HTTP client ([`HttpContactTransport`]) or
//! by an in-memory fake in tests.
//!
//! ## Flow
//!
//! 1. `ContactForm::begin_submit` marks every field touched and validates.
//!    Invalid forms stop here; no request is made.
//! 2. Exactly one `post_contact` call carries the four values verbatim.
//! 3. `ContactForm::finish_submit` resets the form on a successful
//!    acknowledgment and keeps it otherwise. There is no retry.
//!
use super::form::{ContactForm, ContactFormData, FieldErrors};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Path of the relay endpoint, relative to the site's base URL.
pub const CONTACT_PATH: &str = "/api/contact";

/// The `{ success, message }` envelope returned by the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
    pub message: String,
}

impl Ack {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Failure of the outbound relay call itself.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected response status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("Malformed response body: {0}")]
    InvalidResponse(String),
}

/// Why a submit did not end in a sent message.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Form is invalid: {}", .0.summary())]
    Validation(FieldErrors),

    #[error("A submission is already in progress.")]
    InFlight,

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("The contact endpoint rejected the submission: {0}")]
    Rejected(String),
}

/// # Contact Transport (`ContactTransport`)
///
/// The single outbound call made by a submit.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn post_contact(&self, data: &ContactFormData) -> Result<Ack, TransportError>;
}

/// Posts the form as JSON to `{base_url}/api/contact`.
#[derive(Debug, Clone)]
pub struct HttpContactTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContactTransport {
    /// Builds a transport for the site at `base_url` (e.g. `http://localhost:5000`).
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("assignmaker/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), CONTACT_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactTransport for HttpContactTransport {
    async fn post_contact(&self, data: &ContactFormData) -> Result<Ack, TransportError> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(data)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        if status != StatusCode::OK {
            let message = serde_json::from_str::<Ack>(&body).ok().map(|ack| ack.message);
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| TransportError::InvalidResponse(e.to_string()))
    }
}

impl ContactForm {
    /// # Submit (`submit`)
    ///
    /// Validates, performs one relay call through `transport` and applies the
    /// outcome. See the module docs for the full flow.
    pub async fn submit<T>(&mut self, transport: &T) -> Result<Ack, SubmitError>
    where
        T: ContactTransport + ?Sized,
    {
        let data = self.begin_submit()?;
        info!("Submitting contact form for {}", data.email);

        let guard = InFlightGuard(self);
        let outcome = transport.post_contact(&data).await;
        guard.0.finish_submit(outcome)
    }
}

/// Clears the in-flight flag if the submit future is dropped before the
/// relay call resolves. A no-op once `finish_submit` has run.
struct InFlightGuard<'a>(&'a mut ContactForm);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.abandon_submit();
    }
}
