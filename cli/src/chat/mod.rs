//! # AssignMaker Chat Widget Logic
//!
//! File: cli/src/chat/mod.rs
//!
//! ## Overview
//!
//! The scripted chat widget: a pure keyword-based reply selector (`reply`)
//! and the per-widget transcript state (`session`). The `chat` command hosts
//! a session on the terminal.
//!

/// Keyword-to-reply lookup.
pub mod reply;
/// Transcript and draft input of one widget instance.
pub mod session;

pub use session::{ChatSession, Sender};
