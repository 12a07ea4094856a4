//! # AssignMaker Mail Relay
//!
//! File: cli/src/mail/mod.rs
//!
//! ## Overview
//!
//! Server-side delivery of contact messages:
//! - `config`: explicit SMTP settings and credentials (`MailConfig`)
//! - `message`: composing the operator email from a submission
//! - `relay`: the `MailRelay` seam and its SMTP implementation
//!
pub mod config;
pub mod message;
pub mod relay;

pub use message::ContactEmail;
pub use relay::{MailRelay, SmtpRelay};
