//! # Configuration Assembly
//!
//! The single entry point of the crate: composes the individual resolvers
//! into the final [`ProjectConfig`] handed to the external documentation
//! generator.
//!
//! Resolution order is fixed: project root, source files, theme settings,
//! title, version sequence (seeded with the latest stable tag), remote
//! identity, and finally the output-directory reset. The first failure in
//! any step propagates unmodified; no partial configuration is ever
//! returned and no step is retried.

use std::path::PathBuf;

use serde::Serialize;

use crate::build_dirs::clear_directories;
use crate::defaults::{BUILD_DIR, CACHE_DIR, DEFAULT_OPENED_LEVEL, SOURCE_PATTERN};
use crate::error::Result;
use crate::process::ProcessRunner;
use crate::remote::{resolve_remote_identity, RemoteIdentity};
use crate::root::resolve_root;
use crate::sources::enumerate_sources;
use crate::tags::latest_stable_tag;
use crate::theme::{resolve_theme_settings, ThemeSettings};
use crate::title::resolve_title;
use crate::versions::{GitVersionSwitcher, VersionSequence};

/// Inputs to an assembly invocation.
///
/// Everything that was ambient process state in older documentation setups
/// (working directory, environment lookups) is passed in explicitly here so
/// assembly is deterministic given fixed inputs.
#[derive(Debug, Clone, Default)]
pub struct AssembleOptions {
    /// Explicit project root; bypasses upward discovery when set.
    pub root: Option<PathBuf>,
    /// Directory the upward root search starts from when no explicit root
    /// is given. Defaults to the process working directory.
    pub start_dir: Option<PathBuf>,
    /// Optional theme override path (base name = theme, parent = template
    /// directory).
    pub theme: Option<PathBuf>,
    /// Glob applied to source file names. Defaults to `*.rs`.
    pub source_pattern: Option<String>,
}

/// The assembled configuration consumed by the documentation generator.
///
/// Built once per invocation and never mutated afterwards.
#[derive(Debug, Serialize)]
pub struct ProjectConfig {
    pub title: String,
    pub root: PathBuf,
    pub sources: Vec<PathBuf>,
    pub versions: VersionSequence,
    pub build_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub remote_repository: RemoteIdentity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeSettings>,
    pub default_opened_level: u32,
}

impl ProjectConfig {
    /// The switcher the generator should hand back to
    /// [`VersionSequence::iter`] so the terminal restoration runs against
    /// this project's working tree.
    pub fn version_switcher<'a>(&'a self, runner: &'a dyn ProcessRunner) -> GitVersionSwitcher<'a> {
        GitVersionSwitcher::new(runner, &self.root)
    }
}

/// Assemble the documentation configuration for one project.
pub fn assemble(runner: &dyn ProcessRunner, options: &AssembleOptions) -> Result<ProjectConfig> {
    let start_dir = match &options.start_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    let root = resolve_root(options.root.as_deref(), &start_dir)?;
    log::info!("assembling documentation config for {}", root.display());

    let source_pattern = options
        .source_pattern
        .as_deref()
        .unwrap_or(SOURCE_PATTERN);
    let sources = enumerate_sources(&root, source_pattern)?;

    let theme = resolve_theme_settings(options.theme.as_deref());
    let title = resolve_title(&root)?;

    let latest = latest_stable_tag(runner, &root)?;
    log::info!("documenting latest stable version {}", latest);
    let versions = VersionSequence::single(latest);

    let remote_repository = resolve_remote_identity(runner, &root)?;

    let build_dir = root.join(BUILD_DIR);
    let cache_dir = root.join(CACHE_DIR);
    clear_directories(runner, &root, &[&build_dir, &cache_dir])?;

    Ok(ProjectConfig {
        title,
        root,
        sources,
        versions,
        build_dir,
        cache_dir,
        remote_repository,
        theme,
        default_opened_level: DEFAULT_OPENED_LEVEL,
    })
}
