//! Project root discovery
//!
//! Binaries can be launched from anywhere inside the working tree;
//! configuration and data paths are resolved against the project root.

use std::path::{Path, PathBuf};

use crate::{ConfigError, Result};

/// Maximum number of parent directories to climb while searching
const MAX_SEARCH_DEPTH: usize = 5;

/// Marker file that identifies the project root
const ROOT_MARKER: &str = "README.md";

/// Walk upward from `start` looking for the project root.
///
/// A directory counts as the root when it contains the marker file or
/// the default configuration file.
pub fn find_project_root(start: impl AsRef<Path>) -> Result<PathBuf> {
    let start = start.as_ref();
    let mut current = start.to_path_buf();

    for _ in 0..MAX_SEARCH_DEPTH {
        if current.join(ROOT_MARKER).exists() || current.join("config/config.yaml").exists() {
            return Ok(current);
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }

    Err(ConfigError::RootNotFound {
        start: start.to_path_buf(),
        depth: MAX_SEARCH_DEPTH,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_finds_root_by_marker() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        fs::write(root.join("README.md"), "# project").unwrap();
        fs::create_dir_all(root.join("scripts/deep")).unwrap();

        let found = find_project_root(root.join("scripts/deep")).unwrap();
        assert_eq!(found, root);
    }

    #[test]
    fn test_finds_root_by_config_file() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        fs::create_dir_all(root.join("config")).unwrap();
        fs::write(root.join("config/config.yaml"), "paths: {}").unwrap();
        fs::create_dir_all(root.join("notebooks")).unwrap();

        let found = find_project_root(root.join("notebooks")).unwrap();
        assert_eq!(found, root);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b/c/d/e/f/g");
        fs::create_dir_all(&nested).unwrap();

        let result = find_project_root(&nested);
        assert!(result.is_err());
    }
}
