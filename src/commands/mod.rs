//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `apidoc-config` command-line tool.
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and
//!   options, derived using `clap`.
//! - An `execute` function that takes the parsed `Args`, calls into the
//!   `apidoc_config` library to perform the core logic, and renders the
//!   result.

pub mod assemble;
