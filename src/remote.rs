//! # Remote Repository Identity
//!
//! Resolves the canonical `owner/repository` identity of the project from
//! the git remote named `origin`. Only HTTPS GitHub remotes in exactly the
//! form `https://github.com/<owner>/<repo>.git` are accepted; SSH remotes
//! and URLs without the `.git` suffix are rejected so the identity handed
//! to the documentation generator always maps to a browsable GitHub URL.

use std::fmt;
use std::path::Path;

use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::process::ProcessRunner;

/// Accepted remote form. The single capture is the `owner/repo` segment.
const GITHUB_REMOTE_PATTERN: &str = r"^https://github\.com/([^/.]+/[^/.]+)\.git";

/// The `owner/repository` pair parsed from the origin URL.
///
/// Both components are non-empty and contain no further path separators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteIdentity {
    pub owner: String,
    pub repository: String,
}

impl fmt::Display for RemoteIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repository)
    }
}

/// Resolve the remote identity of the repository at `root`.
///
/// Runs `git remote get-url origin`; a non-zero exit is
/// [`Error::ProcessExecution`], empty output is [`Error::RemoteResolution`],
/// and any URL outside the accepted HTTPS GitHub form is
/// [`Error::InvalidRemoteUrl`] carrying the raw URL.
pub fn resolve_remote_identity(runner: &dyn ProcessRunner, root: &Path) -> Result<RemoteIdentity> {
    let output = runner.run("git", &["remote", "get-url", "origin"], root)?;
    let url = output.trim();

    if url.is_empty() {
        return Err(Error::RemoteResolution);
    }

    parse_remote_url(url)
}

/// Parse a remote URL into an identity, without touching git.
pub fn parse_remote_url(url: &str) -> Result<RemoteIdentity> {
    let pattern = Regex::new(GITHUB_REMOTE_PATTERN)?;

    let segment = pattern
        .captures(url)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| Error::InvalidRemoteUrl {
            url: url.to_string(),
        })?;

    // The capture's character classes guarantee exactly one separator with
    // non-empty components on both sides.
    let (owner, repository) = segment
        .as_str()
        .split_once('/')
        .ok_or_else(|| Error::InvalidRemoteUrl {
            url: url.to_string(),
        })?;

    Ok(RemoteIdentity {
        owner: owner.to_string(),
        repository: repository.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct ScriptedRunner {
        output: String,
    }

    impl ProcessRunner for ScriptedRunner {
        fn run(&self, _program: &str, _args: &[&str], _working_dir: &Path) -> Result<String> {
            Ok(self.output.clone())
        }
    }

    #[test]
    fn test_parse_https_github_url() {
        let identity = parse_remote_url("https://github.com/acme/widgets.git").unwrap();
        assert_eq!(identity.owner, "acme");
        assert_eq!(identity.repository, "widgets");
        assert_eq!(identity.to_string(), "acme/widgets");
    }

    #[test]
    fn test_ssh_remote_rejected() {
        let err = parse_remote_url("git@github.com:acme/widgets.git").unwrap_err();
        match err {
            Error::InvalidRemoteUrl { url } => {
                assert_eq!(url, "git@github.com:acme/widgets.git");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_git_suffix_rejected() {
        assert!(matches!(
            parse_remote_url("https://github.com/acme/widgets").unwrap_err(),
            Error::InvalidRemoteUrl { .. }
        ));
    }

    #[test]
    fn test_non_github_host_rejected() {
        assert!(matches!(
            parse_remote_url("https://gitlab.com/acme/widgets.git").unwrap_err(),
            Error::InvalidRemoteUrl { .. }
        ));
    }

    #[test]
    fn test_extra_path_segment_rejected() {
        assert!(matches!(
            parse_remote_url("https://github.com/acme/sub/widgets.git").unwrap_err(),
            Error::InvalidRemoteUrl { .. }
        ));
    }

    #[test]
    fn test_resolve_trims_trailing_newline() {
        let runner = ScriptedRunner {
            output: "https://github.com/acme/widgets.git\n".to_string(),
        };
        let identity = resolve_remote_identity(&runner, &PathBuf::from("/tmp")).unwrap();
        assert_eq!(identity.to_string(), "acme/widgets");
    }

    #[test]
    fn test_resolve_empty_output_fails() {
        let runner = ScriptedRunner {
            output: "\n".to_string(),
        };
        let err = resolve_remote_identity(&runner, &PathBuf::from("/tmp")).unwrap_err();
        assert!(matches!(err, Error::RemoteResolution));
    }
}
