//! # Assemble Command Implementation
//!
//! This module implements the `assemble` subcommand, which resolves a
//! project's documentation configuration and prints it, either as a human
//! readable summary or as JSON for consumption by generator frontends.
//!
//! Any resolution failure aborts the invocation with a message naming the
//! failing step; no partial configuration is printed.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use apidoc_config::assembler::{assemble, AssembleOptions, ProjectConfig};
use apidoc_config::defaults;
use apidoc_config::process::SystemProcessRunner;

/// Assemble and print the documentation configuration for a project
#[derive(Args, Debug)]
pub struct AssembleArgs {
    /// Explicit project root directory.
    ///
    /// When omitted, the root is discovered by searching upward from the
    /// current directory for a `.git` entry.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Theme override: the base filename becomes the theme name and the
    /// parent directory becomes the template search directory.
    #[arg(long, value_name = "PATH", env = defaults::THEME_ENV_VAR)]
    pub theme: Option<PathBuf>,

    /// Glob applied to source file names under <root>/src.
    #[arg(long, value_name = "GLOB", default_value = defaults::SOURCE_PATTERN)]
    pub source_pattern: String,

    /// Print the assembled configuration as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the `assemble` command.
pub fn execute(args: AssembleArgs) -> Result<()> {
    let runner = SystemProcessRunner::new();
    let options = AssembleOptions {
        root: args.root,
        start_dir: None,
        theme: args.theme,
        source_pattern: Some(args.source_pattern),
    };

    let config = assemble(&runner, &options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print_summary(&config);
    }

    Ok(())
}

fn print_summary(config: &ProjectConfig) {
    println!("Title:          {}", config.title);
    println!("Root:           {}", config.root.display());
    println!("Remote:         {}", config.remote_repository);
    println!(
        "Versions:       {}",
        config
            .versions
            .versions()
            .iter()
            .map(|v| v.label())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("Source files:   {}", config.sources.len());
    println!("Build dir:      {}", config.build_dir.display());
    println!("Cache dir:      {}", config.cache_dir.display());
    if let Some(theme) = &config.theme {
        println!("Theme:          {}", theme.theme);
        for dir in &theme.template_dirs {
            println!("Template dir:   {}", dir.display());
        }
    }
    println!("Opened level:   {}", config.default_opened_level);
}
