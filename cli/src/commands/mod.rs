//! # AssignMaker Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Top-level subcommands of the `assignmaker` binary. Each defines its own
//! argument struct and an async `handle_*` function called from `main.rs`.
//!
//! - `serve`: the website (static site + contact mail relay)
//! - `chat`: a chat widget session on the terminal
//! - `contact`: a contact form submission from the terminal
//!

/// Chat widget host. Reads messages and prints the bot's replies.
pub mod chat;
/// Contact form host. Validates and submits the form to a running site.
pub mod contact;
/// The site server and its `POST /api/contact` relay.
pub mod serve;
