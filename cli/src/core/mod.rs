//! # AssignMaker Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//! - `config`: the optional `assignmaker.toml` file
//! - `error`: application error categories and the `Result` alias
//!
//! ```rust
//! use crate::core::config;
//! use crate::core::error::{Result, SiteError};
//! ```
//!
pub mod config;
pub mod error;
