//! # API Documentation Config Library
//!
//! This library assembles the build configuration for an external API
//! documentation generator by inspecting a project's source tree and git
//! metadata. It is used by the `apidoc-config` command-line tool but can
//! also be embedded by generator frontends that want the assembled
//! configuration in-process.
//!
//! ## Quick Example
//!
//! ```
//! use apidoc_config::error::Result;
//! use apidoc_config::versions::{Version, VersionSequence, VersionSwitcher};
//!
//! struct NoopSwitcher;
//!
//! impl VersionSwitcher for NoopSwitcher {
//!     fn switch(&self, _version: &Version) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let sequence = VersionSequence::single(Version::new("v1.2.3"));
//! let labels: Vec<String> = sequence
//!     .iter(&NoopSwitcher)
//!     .map(|v| v.unwrap().label().to_string())
//!     .collect();
//! assert_eq!(labels, ["v1.2.3"]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Assembly (`assembler`)**: The single entry point. Resolves the
//!   project root, sources, theme, title, versions and remote identity in
//!   a fixed order and returns the immutable [`assembler::ProjectConfig`].
//! - **Version Sequence (`versions`)**: The stateful iteration contract
//!   handed to the generator: every real version in order, then exactly one
//!   restoration of the original working tree.
//! - **Resolvers (`root`, `title`, `theme`, `tags`, `remote`, `sources`)**:
//!   Small, largely stateless components; each owns one resolution step and
//!   one slice of the error taxonomy.
//! - **Process Execution (`process`)**: External commands modelled as an
//!   injectable capability so git-backed resolution is testable with
//!   scripted fakes.
//!
//! ## Execution Flow
//!
//! `assembler::assemble` runs the steps in sequence: root → sources →
//! theme → title → versions → remote → output-directory reset. Any failure
//! in any step aborts the invocation; there is no partial configuration.

pub mod assembler;
pub mod build_dirs;
pub mod defaults;
pub mod error;
pub mod process;
pub mod remote;
pub mod root;
pub mod sources;
pub mod tags;
pub mod theme;
pub mod title;
pub mod versions;
