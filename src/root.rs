//! # Project Root Resolution
//!
//! Determines the project root directory once per invocation. An explicit
//! root argument always wins (trimmed of trailing path separators);
//! otherwise the resolver walks upward from a starting directory until it
//! finds an ancestor containing the root marker entry (`.git`). This keeps
//! root detection an explicit, testable convention instead of relying on
//! the process working directory alone, since the tool may be invoked from
//! anywhere inside the project.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::defaults::ROOT_MARKER;
use crate::error::{Error, Result};

/// Resolve the project root.
///
/// `explicit` bypasses discovery entirely; `start` is the directory the
/// upward search begins from (typically the process working directory).
pub fn resolve_root(explicit: Option<&Path>, start: &Path) -> Result<PathBuf> {
    match explicit {
        Some(root) => Ok(trim_trailing_separators(root)),
        None => detect_root(start),
    }
}

/// Walk upward from `start` looking for the first ancestor that contains
/// the root marker.
pub fn detect_root(start: &Path) -> Result<PathBuf> {
    for ancestor in start.ancestors() {
        if ancestor.join(ROOT_MARKER).exists() {
            log::debug!("detected project root at {}", ancestor.display());
            return Ok(ancestor.to_path_buf());
        }
    }

    Err(Error::RootDetection {
        start: start.to_path_buf(),
        marker: ROOT_MARKER.to_string(),
    })
}

fn trim_trailing_separators(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    let trimmed = raw.trim_end_matches(MAIN_SEPARATOR);

    // Never trim a bare root path down to an empty string.
    if trimmed.is_empty() {
        path.to_path_buf()
    } else {
        PathBuf::from(trimmed)
    }
}
