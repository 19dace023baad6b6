//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for
//! `apidoc-config`. It uses the `thiserror` library to create a
//! comprehensive `Error` enum that covers all anticipated failure modes,
//! providing clear and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur while assembling a documentation configuration. Each variant
//!   corresponds to a specific resolution step and includes contextual
//!   information to aid in debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the crate to simplify function signatures.
//!
//! Every failure is fatal to the current assembly invocation: no variant is
//! retried or recovered from, and the assembler propagates the first error
//! it encounters unmodified to its caller.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for configuration assembly operations
#[derive(Error, Debug)]
pub enum Error {
    /// No project root could be determined.
    ///
    /// Raised when no explicit root was supplied and the upward search from
    /// the starting directory found no ancestor containing the root marker.
    #[error("Could not detect a project root above {}: no '{marker}' entry found", start.display())]
    RootDetection { start: PathBuf, marker: String },

    /// The readme file could not be read.
    #[error("Could not read the readme at {}: {message}", path.display())]
    TitleRead { path: PathBuf, message: String },

    /// The readme content did not begin with a parseable heading.
    #[error("Could not parse a title from {}: the file must start with a '#' heading", path.display())]
    TitleParse { path: PathBuf },

    /// An external command exited non-zero or could not be launched.
    #[error("Command '{command}' failed in {}: {stderr}", dir.display())]
    ProcessExecution {
        command: String,
        dir: PathBuf,
        stderr: String,
    },

    /// The tag list contained no stable semantic-version tags.
    #[error("No stable versions exist to create documentation")]
    NoStableVersions,

    /// The remote lookup succeeded but produced no URL.
    #[error("The git remote 'origin' returned an empty URL")]
    RemoteResolution,

    /// The remote URL is present but not an accepted HTTPS GitHub URL.
    ///
    /// Carries the offending URL for diagnostics.
    #[error("The remote url '{url}' for origin is not a valid github url")]
    InvalidRemoteUrl { url: String },

    /// An output path exists but is not a directory.
    #[error("The file path '{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
