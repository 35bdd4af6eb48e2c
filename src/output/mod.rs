//! Result persistence
//!
//! The traversal hands its site sequence to this layer at the end of every
//! run, completed or cancelled. Format is chosen by the destination file's
//! extension; JSON is the only format currently supported.

mod json;

pub use json::write_sites;

use crate::state::Site;
use crate::{Result, ScoutError};
use std::path::Path;

/// Persists discovered sites to the configured destination
pub fn save_sites(sites: &[Site], path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => write_sites(sites, path),
        _ => Err(ScoutError::UnsupportedOutput(path.display().to_string())),
    }
}
