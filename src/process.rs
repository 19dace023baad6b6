//! # External Process Execution
//!
//! This module models external command execution as an injectable
//! capability so that the resolution logic built on top of it (tag
//! discovery, remote lookup, directory clearing, version switching) can be
//! tested without invoking real version-control tooling.
//!
//! ## Key Components
//!
//! - **`ProcessRunner`**: The capability trait. Implementations run a
//!   command in a working directory and return its captured standard
//!   output, failing on non-zero exit or launch failure.
//!
//! - **`SystemProcessRunner`**: The production implementation backed by
//!   `std::process::Command`. Every invocation is a blocking call with no
//!   timeout; a hung command hangs the whole assembly.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Capability for running an external command in a working directory.
///
/// Implementations must return the command's captured stdout on success and
/// fail with [`Error::ProcessExecution`] when the command exits non-zero or
/// cannot be launched at all.
pub trait ProcessRunner {
    /// Run `program` with `args` in `working_dir` and capture its stdout.
    fn run(&self, program: &str, args: &[&str], working_dir: &Path) -> Result<String>;
}

/// Production process runner backed by the system shell-free `Command` API.
///
/// This uses the system binaries directly, which means git invocations
/// automatically pick up the user's SSH keys, credential helpers and
/// `~/.gitconfig`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        SystemProcessRunner
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, program: &str, args: &[&str], working_dir: &Path) -> Result<String> {
        let rendered = render_command(program, args);
        log::debug!("running '{}' in {}", rendered, working_dir.display());

        let output = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .output()
            .map_err(|e| Error::ProcessExecution {
                command: rendered.clone(),
                dir: working_dir.to_path_buf(),
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::ProcessExecution {
                command: rendered,
                dir: working_dir.to_path_buf(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Render a program and its arguments as a single display string for error
/// payloads and logging.
pub(crate) fn render_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
