//! # Theme Override Resolution
//!
//! Optional presentation overrides for the documentation generator. The
//! override is a path-like value: its base filename becomes the theme name
//! and its parent directory becomes the single template search directory.
//!
//! The value is passed in explicitly (the CLI wires it to the
//! `APIDOC_THEME` environment variable), so resolution is a pure function
//! of its input and assembly stays deterministic.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Presentation overrides: a theme name and one template directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeSettings {
    pub theme: String,
    pub template_dirs: Vec<PathBuf>,
}

/// Resolve theme settings from an optional override path.
///
/// Absent or empty input means no override. A value without a usable base
/// filename (such as a bare `/`) is likewise treated as no override.
pub fn resolve_theme_settings(theme_path: Option<&Path>) -> Option<ThemeSettings> {
    let path = theme_path?;
    if path.as_os_str().is_empty() {
        return None;
    }

    let theme = path.file_name()?.to_string_lossy().into_owned();

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Some(ThemeSettings {
        theme,
        template_dirs: vec![parent],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_input_is_no_override() {
        assert_eq!(resolve_theme_settings(None), None);
    }

    #[test]
    fn test_empty_input_is_no_override() {
        assert_eq!(resolve_theme_settings(Some(Path::new(""))), None);
    }

    #[test]
    fn test_path_splits_into_name_and_template_dir() {
        let settings =
            resolve_theme_settings(Some(Path::new("/opt/themes/midnight"))).unwrap();
        assert_eq!(settings.theme, "midnight");
        assert_eq!(settings.template_dirs, vec![PathBuf::from("/opt/themes")]);
    }

    #[test]
    fn test_bare_name_uses_current_directory() {
        let settings = resolve_theme_settings(Some(Path::new("midnight"))).unwrap();
        assert_eq!(settings.theme, "midnight");
        assert_eq!(settings.template_dirs, vec![PathBuf::from(".")]);
    }

    #[test]
    fn test_root_path_is_no_override() {
        assert_eq!(resolve_theme_settings(Some(Path::new("/"))), None);
    }
}
