//! # AssignMaker Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test crates in `cli/tests/`. Each test
//! file declares `mod common;` and builds commands through `assignmaker_cmd()`.
//!

// Not every test crate uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;

/// Environment variables the binary reads; cleared so the host shell cannot leak in.
const SITE_ENV_VARS: &[&str] = &[
    "PORT",
    "ASSIGNMAKER_HOST",
    "ASSIGNMAKER_ASSETS",
    "ASSIGNMAKER_API_URL",
    "SMTP_HOST",
    "SMTP_PORT",
    "SMTP_TLS",
    "EMAIL_USER",
    "EMAIL_PASS",
    "EMAIL_TO",
    "RUST_LOG",
];

/// # Get AssignMaker Command (`assignmaker_cmd`)
///
/// An `assert_cmd::Command` for the compiled `assignmaker` binary with the
/// site's environment variables removed.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn assignmaker_cmd() -> Command {
    let mut cmd =
        Command::cargo_bin("assignmaker").expect("Failed to find assignmaker binary for testing");
    for var in SITE_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// A loopback URL nothing is listening on.
pub fn closed_local_url() -> String {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind a throwaway port");
    let port = listener.local_addr().expect("No local address").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
