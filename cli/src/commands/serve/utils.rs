//! # AssignMaker Server Utilities
//!
//! File: cli/src/commands/serve/utils.rs
//!
//! Startup diagnostics for the built site directory.
//!
use std::path::Path;
use tracing::{debug, warn};

/// What the asset directory looked like at startup.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AssetSummary {
    pub files: usize,
    pub directories: usize,
    pub has_index: bool,
}

/// # Summarize Assets (`summarize_assets`)
///
/// Counts the top-level entries of `dir` (logging each at DEBUG level) and
/// checks for `index_file`. Read failures are logged and yield an empty
/// summary; they never stop the server.
pub fn summarize_assets(dir: &Path, index_file: &str) -> AssetSummary {
    let mut summary = AssetSummary::default();

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Could not read asset directory '{}': {}", dir.display(), e);
            return summary;
        }
    };

    for entry in entries.filter_map(std::result::Result::ok) {
        match entry.metadata() {
            Ok(metadata) if metadata.is_dir() => {
                summary.directories += 1;
                debug!("  - DIR  : {}", entry.file_name().to_string_lossy());
            }
            Ok(_) => {
                summary.files += 1;
                if entry.file_name().to_string_lossy() == index_file {
                    summary.has_index = true;
                }
                debug!("  - FILE : {}", entry.file_name().to_string_lossy());
            }
            Err(e) => warn!("  - Could not read metadata for {}: {}", entry.path().display(), e),
        }
    }

    summary
}
