//! # Documentation Title Resolution
//!
//! Extracts a human-readable title from the first line of the project's
//! `README.md` and formats it as `"<heading> API"`.
//!
//! Matching is anchored to the very start of the file: only a top-level
//! `#` heading on the first line counts. A heading further down the
//! document, or a `##` sub-heading at the top, is a parse failure rather
//! than a fallback.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::defaults::README_FILE;
use crate::error::{Error, Result};

/// Leading heading: a single `#`, the heading text, an optional closing
/// `#`, terminated by a line break or end of input.
const TITLE_PATTERN: &str = r"^#([^#\r\n]+)#?(\r\n|\r|\n|$)";

/// Resolve the documentation title from `<root>/README.md`.
pub fn resolve_title(root: &Path) -> Result<String> {
    let path = root.join(README_FILE);
    let readme = fs::read_to_string(&path).map_err(|e| Error::TitleRead {
        path: path.clone(),
        message: e.to_string(),
    })?;

    let pattern = Regex::new(TITLE_PATTERN)?;

    let heading = pattern
        .captures(&readme)
        .and_then(|captures| captures.get(1))
        .ok_or(Error::TitleParse { path })?;

    Ok(format!("{} API", heading.as_str().trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_readme(content: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), content).unwrap();
        temp
    }

    #[test]
    fn test_title_from_first_line_heading() {
        let temp = write_readme("# Widget Library\n\nSome description.\n");
        assert_eq!(resolve_title(temp.path()).unwrap(), "Widget Library API");
    }

    #[test]
    fn test_title_without_trailing_newline() {
        let temp = write_readme("# Widget Library");
        assert_eq!(resolve_title(temp.path()).unwrap(), "Widget Library API");
    }

    #[test]
    fn test_title_with_closing_hash() {
        let temp = write_readme("# Widget Library #\nintro\n");
        assert_eq!(resolve_title(temp.path()).unwrap(), "Widget Library API");
    }

    #[test]
    fn test_title_with_windows_line_ending() {
        let temp = write_readme("# Widget Library\r\nintro\r\n");
        assert_eq!(resolve_title(temp.path()).unwrap(), "Widget Library API");
    }

    #[test]
    fn test_heading_not_on_first_line_fails() {
        let temp = write_readme("Widget Library\n# intro\n");
        let err = resolve_title(temp.path()).unwrap_err();
        assert!(matches!(err, Error::TitleParse { .. }));
    }

    #[test]
    fn test_subheading_at_top_fails() {
        let temp = write_readme("## Widget Library\n");
        let err = resolve_title(temp.path()).unwrap_err();
        assert!(matches!(err, Error::TitleParse { .. }));
    }

    #[test]
    fn test_missing_readme_fails_with_read_error() {
        let temp = TempDir::new().unwrap();
        let err = resolve_title(temp.path()).unwrap_err();
        match err {
            Error::TitleRead { path, .. } => {
                assert!(path.ends_with("README.md"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
