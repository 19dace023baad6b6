//! Default values and fixed conventions for apidoc-config.
//!
//! This module provides centralized constants used across resolvers and
//! commands, ensuring consistency and avoiding duplication.

/// Directory entry that marks the project root during upward discovery.
pub const ROOT_MARKER: &str = ".git";

/// Readme file parsed for the documentation title.
pub const README_FILE: &str = "README.md";

/// Subdirectory of the root whose files are documented.
pub const SOURCE_DIR: &str = "src";

/// Default glob applied to source file names.
pub const SOURCE_PATTERN: &str = "*.rs";

/// Build output directory, relative to the project root.
pub const BUILD_DIR: &str = "build/doc";

/// Cache directory, relative to the project root.
pub const CACHE_DIR: &str = "build/cache";

/// Environment variable carrying an optional theme override path.
pub const THEME_ENV_VAR: &str = "APIDOC_THEME";

/// Navigation depth opened by default in the generated documentation.
pub const DEFAULT_OPENED_LEVEL: u32 = 2;
