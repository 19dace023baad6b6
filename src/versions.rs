//! # Version Sequence and Restoration Protocol
//!
//! This module implements the stateful version-iteration contract handed to
//! the external documentation generator. The generator walks the sequence
//! and checks out each version in turn; once it has exhausted the real
//! versions, the sequence itself is responsible for switching the working
//! tree back to its original state.
//!
//! ## The Restoration Contract
//!
//! Iteration is an explicit state machine (`AT_VERSION`, `NEEDS_RESTORE`,
//! `DONE`) plus a "restore owed" flag:
//!
//! 1. Yielding a real version records that a restore is owed.
//! 2. When the real versions are exhausted and a restore is owed, the
//!    sequence invokes the [`VersionSwitcher`] exactly once with the
//!    synthetic restore marker `-`, clears the flag, and terminates.
//! 3. A pass that never yielded a real version terminates without touching
//!    the switcher at all.
//!
//! Restoration therefore fires at most once per pass, and only if at least
//! one real version was actually visited. Starting a fresh pass with
//! [`VersionSequence::iter`] re-arms the protocol from the beginning.
//!
//! Switcher failures (the restore runs an external git command) surface as
//! a single `Err` item in the iterator, after which the pass is done.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::process::ProcessRunner;

/// Label of the synthetic version that signals "return to the original
/// working-tree state". For git, `checkout -` switches back to the
/// previously checked-out ref.
pub const RESTORE_MARKER: &str = "-";

/// A version to document: either a real stable release tag or the synthetic
/// restore marker. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Version {
    label: String,
}

impl Version {
    pub fn new(label: impl Into<String>) -> Self {
        Version {
            label: label.into(),
        }
    }

    /// The synthetic marker denoting "no specific version / restore".
    pub fn restore_marker() -> Self {
        Version::new(RESTORE_MARKER)
    }

    pub fn is_restore_marker(&self) -> bool {
        self.label == RESTORE_MARKER
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Capability that moves the working tree to a given version.
///
/// The restoration protocol calls this with the restore marker when a pass
/// terminates; the generator's own checkouts go through the same mechanism
/// but are outside this crate's contract.
pub trait VersionSwitcher {
    fn switch(&self, version: &Version) -> Result<()>;
}

/// Git-backed switcher: runs `git checkout <label>` in the project root.
pub struct GitVersionSwitcher<'a> {
    runner: &'a dyn ProcessRunner,
    root: &'a Path,
}

impl<'a> GitVersionSwitcher<'a> {
    pub fn new(runner: &'a dyn ProcessRunner, root: &'a Path) -> Self {
        GitVersionSwitcher { runner, root }
    }
}

impl VersionSwitcher for GitVersionSwitcher<'_> {
    fn switch(&self, version: &Version) -> Result<()> {
        log::debug!("switching working tree to version '{}'", version);
        self.runner
            .run("git", &["checkout", version.label()], self.root)
            .map(|_| ())
    }
}

/// An ordered, stateful collection of versions plus one implicit trailing
/// restore marker.
///
/// The sequence itself only owns the version list; all per-pass state lives
/// in the [`VersionIter`] produced by [`iter`](VersionSequence::iter), so a
/// fresh pass always re-runs the protocol cleanly from the start.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct VersionSequence {
    versions: Vec<Version>,
}

impl VersionSequence {
    pub fn new() -> Self {
        VersionSequence::default()
    }

    /// A sequence seeded with exactly one real version, the common case.
    pub fn single(version: Version) -> Self {
        VersionSequence {
            versions: vec![version],
        }
    }

    /// Append a real version; versions are yielded in insertion order.
    pub fn add(&mut self, version: Version) {
        self.versions.push(version);
    }

    pub fn versions(&self) -> &[Version] {
        &self.versions
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Start a fresh iteration pass using `switcher` for the terminal
    /// restoration action.
    pub fn iter<'a>(&'a self, switcher: &'a dyn VersionSwitcher) -> VersionIter<'a> {
        VersionIter {
            versions: &self.versions,
            switcher,
            state: PassState::AtVersion { next: 0 },
            restore_owed: false,
        }
    }
}

/// Position of an iteration pass within the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PassState {
    /// Positioned before or within the real-version list.
    AtVersion { next: usize },
    /// Real versions exhausted, restore marker not yet handled.
    NeedsRestore,
    /// Pass terminated; no further elements, no further restoration.
    Done,
}

/// A single iteration pass over a [`VersionSequence`].
///
/// Yields each real version as `Ok`, then performs the one-shot restoration
/// before reporting exhaustion. A failed restoration is yielded as a single
/// `Err` item.
pub struct VersionIter<'a> {
    versions: &'a [Version],
    switcher: &'a dyn VersionSwitcher,
    state: PassState,
    restore_owed: bool,
}

impl Iterator for VersionIter<'_> {
    type Item = Result<Version>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                PassState::AtVersion { next } => {
                    if let Some(version) = self.versions.get(next) {
                        self.state = PassState::AtVersion { next: next + 1 };
                        self.restore_owed = true;
                        return Some(Ok(version.clone()));
                    }
                    self.state = PassState::NeedsRestore;
                }
                PassState::NeedsRestore => {
                    self.state = PassState::Done;
                    if self.restore_owed {
                        self.restore_owed = false;
                        if let Err(e) = self.switcher.switch(&Version::restore_marker()) {
                            return Some(Err(e));
                        }
                    }
                    return None;
                }
                PassState::Done => return None,
            }
        }
    }
}
