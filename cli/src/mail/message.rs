//! # Contact Email Composition
//!
//! File: cli/src/mail/message.rs
//!
//! Turns a contact submission into the plain-text message sent to the
//! operator.
//!
use super::relay::MailDispatchError;
use crate::contact::ContactFormData;
use lettre::message::{header::ContentType, Mailbox};
use lettre::Message;

pub const CONTACT_SUBJECT: &str = "New Form Submission";

/// A composed contact email, independent of any transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl ContactEmail {
    /// Sender is the visitor's address, recipient is the operator.
    pub fn compose(submission: &ContactFormData, operator_address: &str) -> Self {
        let body = format!(
            "Name: {}\nEmail: {}\nContact: {}\nService Needed: {}\n",
            submission.name, submission.email, submission.contact, submission.service
        );

        Self {
            from: submission.email.clone(),
            to: operator_address.to_string(),
            subject: CONTACT_SUBJECT.to_string(),
            body,
        }
    }

    /// Builds the RFC 5322 message handed to the SMTP transport.
    pub fn to_message(&self) -> Result<Message, MailDispatchError> {
        let from: Mailbox = self
            .from
            .parse()
            .map_err(|e| MailDispatchError::Address(format!("{}: {}", self.from, e)))?;
        let to: Mailbox = self
            .to
            .parse()
            .map_err(|e| MailDispatchError::Address(format!("{}: {}", self.to, e)))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(self.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(self.body.clone())
            .map_err(|e| MailDispatchError::Build(e.to_string()))
    }
}
