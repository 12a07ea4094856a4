//! # AssignMaker Serve Integration Tests
//!
//! File: cli/tests/serve.rs
//!
//! ## Overview
//!
//! Startup checks of `assignmaker serve`. Each case fails before binding a
//! port, so no server is left running; routing and the contact endpoint are
//! tested in-process by the `commands::serve` unit tests.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_serve_requires_mail_credentials() {
    let site = tempdir().expect("Failed to create temp dir");

    assignmaker_cmd()
        .current_dir(site.path())
        .args(["serve", "."])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("EMAIL_USER"));
}

#[test]
fn test_serve_requires_password() {
    let site = tempdir().expect("Failed to create temp dir");

    assignmaker_cmd()
        .current_dir(site.path())
        .env("EMAIL_USER", "ops@example.com")
        .args(["serve", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("EMAIL_PASS"));
}

#[test]
fn test_serve_rejects_missing_asset_directory() {
    let site = tempdir().expect("Failed to create temp dir");

    assignmaker_cmd()
        .current_dir(site.path())
        .env("EMAIL_USER", "ops@example.com")
        .env("EMAIL_PASS", "app-password")
        .args(["serve", "no-such-dir"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-dir"));
}

#[test]
fn test_serve_rejects_explicit_missing_config() {
    let site = tempdir().expect("Failed to create temp dir");

    assignmaker_cmd()
        .current_dir(site.path())
        .args(["serve", "--config", "missing.toml", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_serve_rejects_unknown_config_key() {
    let site = tempdir().expect("Failed to create temp dir");
    fs::write(
        site.path().join("assignmaker.toml"),
        "[server]\nport = 8080\nbogus = true\n",
    )
    .expect("Failed to write config");

    assignmaker_cmd()
        .current_dir(site.path())
        .args(["serve", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_serve_reads_credentials_from_dotenv() {
    let site = tempdir().expect("Failed to create temp dir");
    fs::write(site.path().join(".env"), "EMAIL_USER=ops@example.com\n")
        .expect("Failed to write .env");

    assignmaker_cmd()
        .current_dir(site.path())
        .args(["serve", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Mail username is not set").not())
        .stderr(predicate::str::contains("EMAIL_PASS"));
}

#[test]
fn test_serve_dotenv_values_reach_every_setting() {
    let site = tempdir().expect("Failed to create temp dir");
    fs::write(
        site.path().join(".env"),
        "EMAIL_USER=ops@example.com\nEMAIL_PASS=app-password\nEMAIL_TO=not-an-address\n",
    )
    .expect("Failed to write .env");

    assignmaker_cmd()
        .current_dir(site.path())
        .args(["serve", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid operator address 'not-an-address'"));
}

#[test]
fn test_serve_environment_overrides_dotenv() {
    let site = tempdir().expect("Failed to create temp dir");
    fs::write(
        site.path().join(".env"),
        "EMAIL_USER=ops@example.com\nEMAIL_PASS=app-password\nEMAIL_TO=not-an-address\n",
    )
    .expect("Failed to write .env");
    // Holding the port makes startup stop at bind, after mail settings were accepted.
    let busy = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind a port");
    let port = busy.local_addr().expect("No local address").port().to_string();

    assignmaker_cmd()
        .current_dir(site.path())
        .env("EMAIL_TO", "inbox@example.com")
        .args(["serve", "--host", "127.0.0.1", "--port", &port, "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid operator address").not())
        .stderr(predicate::str::contains("Failed to bind TCP listener"));
}

#[test]
fn test_serve_warns_about_malformed_dotenv() {
    let site = tempdir().expect("Failed to create temp dir");
    fs::write(site.path().join(".env"), "this is not a variable assignment\n")
        .expect("Failed to write .env");

    assignmaker_cmd()
        .current_dir(site.path())
        .args(["serve", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ignoring .env file"))
        .stderr(predicate::str::contains("EMAIL_USER"));
}
