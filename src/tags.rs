//! # Stable Tag Discovery
//!
//! This module discovers stable release tags from the project's git history
//! and selects the latest one for documentation.
//!
//! ## Process
//!
//! 1.  **Tag Listing**: `git tag` is run in the project root through the
//!     injected process runner.
//!
//! 2.  **Stable Filtering**: Only tags matching the exact three-component
//!     pattern `v?MAJOR.MINOR.PATCH` are retained. Pre-release and build
//!     metadata suffixes (`1.0.0-rc.1`, `1.0.0+build`) are not stable
//!     releases and are dropped.
//!
//! 3.  **Version Ordering**: The retained tags are compared numerically,
//!     segment by segment, via `semver::Version`. Lexical ordering would
//!     get `1.2.9` vs `1.2.10` wrong; semantic ordering does not.
//!
//! 4.  **Selection**: The maximum version wins. When two syntactically
//!     distinct tags compare version-equal (`v1.0.0` vs `1.0.0`), the
//!     `v`-prefixed form wins deterministically.

use std::cmp::Ordering;
use std::path::Path;

use regex::Regex;
use semver::Version as SemverVersion;

use crate::error::{Error, Result};
use crate::process::ProcessRunner;
use crate::versions::Version;

/// Exact stable-tag pattern: three numeric components, optional `v` prefix,
/// no suffix of any kind.
const STABLE_TAG_PATTERN: &str = r"^v?\d+\.\d+\.\d+$";

/// Resolve the latest stable release tag of the repository at `root`.
///
/// Fails with [`Error::ProcessExecution`] when `git tag` cannot be run and
/// with [`Error::NoStableVersions`] when no tag matches the stable pattern.
pub fn latest_stable_tag(runner: &dyn ProcessRunner, root: &Path) -> Result<Version> {
    let output = runner.run("git", &["tag"], root)?;
    let stable = filter_stable_tags(&output)?;

    log::debug!("found {} stable tag(s)", stable.len());

    stable
        .into_iter()
        .max_by(compare_stable_tags)
        .map(|(tag, _)| Version::new(tag))
        .ok_or(Error::NoStableVersions)
}

/// Split raw `git tag` output into lines and keep the stable ones, paired
/// with their parsed semantic version.
fn filter_stable_tags(output: &str) -> Result<Vec<(String, SemverVersion)>> {
    let pattern = Regex::new(STABLE_TAG_PATTERN)?;

    let stable = output
        .lines()
        .map(str::trim)
        .filter(|line| pattern.is_match(line))
        .filter_map(|tag| {
            let bare = tag.strip_prefix('v').unwrap_or(tag);
            SemverVersion::parse(bare).ok().map(|v| (tag.to_string(), v))
        })
        .collect();

    Ok(stable)
}

/// Numeric comparison, with the `v`-prefixed form winning among
/// version-equal tags so that selection is deterministic.
fn compare_stable_tags(a: &(String, SemverVersion), b: &(String, SemverVersion)) -> Ordering {
    a.1.cmp(&b.1)
        .then_with(|| a.0.starts_with('v').cmp(&b.0.starts_with('v')))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    /// Process runner scripted with a fixed stdout or failure.
    struct ScriptedRunner {
        output: std::result::Result<String, String>,
        calls: RefCell<Vec<String>>,
    }

    impl ScriptedRunner {
        fn ok(output: &str) -> Self {
            ScriptedRunner {
                output: Ok(output.to_string()),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing(stderr: &str) -> Self {
            ScriptedRunner {
                output: Err(stderr.to_string()),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ProcessRunner for ScriptedRunner {
        fn run(&self, program: &str, args: &[&str], working_dir: &Path) -> Result<String> {
            self.calls
                .borrow_mut()
                .push(crate::process::render_command(program, args));
            match &self.output {
                Ok(out) => Ok(out.clone()),
                Err(stderr) => Err(Error::ProcessExecution {
                    command: crate::process::render_command(program, args),
                    dir: working_dir.to_path_buf(),
                    stderr: stderr.clone(),
                }),
            }
        }
    }

    fn root() -> PathBuf {
        PathBuf::from("/tmp/project")
    }

    #[test]
    fn test_selects_numeric_maximum_not_lexical() {
        let runner = ScriptedRunner::ok("v1.9.0\nv1.10.0\nv2.0.0\n");
        let tag = latest_stable_tag(&runner, &root()).unwrap();
        assert_eq!(tag.label(), "v2.0.0");
    }

    #[test]
    fn test_orders_two_digit_patch_numerically() {
        let runner = ScriptedRunner::ok("1.2.0\n1.2.9\n1.2.10\n");
        let tag = latest_stable_tag(&runner, &root()).unwrap();
        assert_eq!(tag.label(), "1.2.10");
    }

    #[test]
    fn test_runs_git_tag_in_root() {
        let runner = ScriptedRunner::ok("v1.0.0\n");
        latest_stable_tag(&runner, &root()).unwrap();
        assert_eq!(runner.calls.borrow().as_slice(), ["git tag"]);
    }

    #[test]
    fn test_ignores_prerelease_and_build_suffixes() {
        let runner = ScriptedRunner::ok("v1.0.0\nv2.0.0-rc.1\nv2.0.0+build.5\nv1.5.0\n");
        let tag = latest_stable_tag(&runner, &root()).unwrap();
        assert_eq!(tag.label(), "v1.5.0");
    }

    #[test]
    fn test_ignores_non_version_tags() {
        let runner = ScriptedRunner::ok("main\nrelease\nv1.0\nv1.0.0.0\nv0.3.0\n");
        let tag = latest_stable_tag(&runner, &root()).unwrap();
        assert_eq!(tag.label(), "v0.3.0");
    }

    #[test]
    fn test_no_stable_tags_fails() {
        let runner = ScriptedRunner::ok("main\nfeature/foo\nv1.0.0-beta\n");
        let err = latest_stable_tag(&runner, &root()).unwrap_err();
        assert!(matches!(err, Error::NoStableVersions));
    }

    #[test]
    fn test_empty_output_fails() {
        let runner = ScriptedRunner::ok("");
        let err = latest_stable_tag(&runner, &root()).unwrap_err();
        assert!(matches!(err, Error::NoStableVersions));
    }

    #[test]
    fn test_git_failure_propagates() {
        let runner = ScriptedRunner::failing("fatal: not a git repository");
        let err = latest_stable_tag(&runner, &root()).unwrap_err();
        match err {
            Error::ProcessExecution { command, stderr, .. } => {
                assert_eq!(command, "git tag");
                assert!(stderr.contains("not a git repository"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_version_equal_tags_prefer_v_prefix() {
        let runner = ScriptedRunner::ok("1.0.0\nv1.0.0\n");
        let tag = latest_stable_tag(&runner, &root()).unwrap();
        assert_eq!(tag.label(), "v1.0.0");

        // Order of appearance does not matter.
        let runner = ScriptedRunner::ok("v1.0.0\n1.0.0\n");
        let tag = latest_stable_tag(&runner, &root()).unwrap();
        assert_eq!(tag.label(), "v1.0.0");
    }
}
