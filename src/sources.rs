//! # Source File Enumeration
//!
//! Produces the set of source file paths the documentation generator will
//! parse: every file under `<root>/src` whose name matches the configured
//! glob pattern, in a deterministic (sorted) order.

use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::defaults::SOURCE_DIR;
use crate::error::{Error, Result};

/// Enumerate source files under `<root>/src` matching `pattern`.
///
/// A missing source directory yields an empty set rather than an error;
/// the generator reports that condition on its own terms.
pub fn enumerate_sources(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let source_dir = root.join(SOURCE_DIR);
    if !source_dir.exists() {
        return Ok(Vec::new());
    }

    let pattern = Pattern::new(pattern).map_err(Error::Glob)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(&source_dir) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if pattern.matches(&name) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
