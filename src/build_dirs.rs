//! # Output Directory Clearing
//!
//! Ensures the build and cache output directories start from a clean
//! state. Existing directories are force-deleted recursively; their actual
//! (re)creation is left to the documentation generator. A path that exists
//! but is not a directory is refused rather than deleted.

use std::path::Path;

use crate::error::{Error, Result};
use crate::process::ProcessRunner;

/// Clear each of `paths`, running the recursive delete in `root`.
///
/// Absent paths are a no-op. A present non-directory fails with
/// [`Error::NotADirectory`] before anything is deleted; a failed deletion
/// surfaces as [`Error::ProcessExecution`].
pub fn clear_directories(
    runner: &dyn ProcessRunner,
    root: &Path,
    paths: &[&Path],
) -> Result<()> {
    for path in paths {
        if !path.exists() {
            continue;
        }

        if !path.is_dir() {
            return Err(Error::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        log::debug!("clearing output directory {}", path.display());
        let target = path.to_string_lossy();
        runner.run("rm", &["-rf", &*target], root)?;
    }

    Ok(())
}
