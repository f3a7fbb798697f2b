//! Artifact matching rules for the cleanup walk

use std::path::Path;

/// Directory names removed wherever they appear in the tree
const ARTIFACT_DIRS: &[&str] = &[
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    "logs",
    "dist",
    "build",
];

/// Exact file names removed wherever they appear (OS metadata)
const ARTIFACT_FILES: &[&str] = &[".DS_Store", "Thumbs.db"];

/// File extensions removed wherever they appear
const ARTIFACT_EXTENSIONS: &[&str] = &["pyc", "pyo", "pyd", "log"];

/// Directory names whose subtrees are never entered or deleted
const EXCLUDED_DIRS: &[&str] = &[".git", ".venv", ".idea"];

/// Project-relative paths whose subtrees are never entered or deleted
const EXCLUDED_PREFIXES: &[&str] = &["data/raw", "data/cleaned"];

/// Matching rules for generated artifacts in a working tree
#[derive(Debug, Clone, Default)]
pub struct ArtifactPatterns;

impl ArtifactPatterns {
    pub fn new() -> Self {
        Self
    }

    /// Whether a directory with this name should be removed entirely
    pub fn is_artifact_dir(&self, name: &str) -> bool {
        ARTIFACT_DIRS.contains(&name) || name.ends_with(".egg-info")
    }

    /// Whether a file with this name should be removed
    pub fn is_artifact_file(&self, name: &str) -> bool {
        if ARTIFACT_FILES.contains(&name) {
            return true;
        }

        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ARTIFACT_EXTENSIONS.contains(&ext),
            _ => false,
        }
    }

    /// Whether a directory (given its root-relative path) is off-limits
    ///
    /// Protected subtrees hold version control state, environments, and
    /// the raw/cleaned data the rest of the toolkit operates on.
    pub fn is_excluded(&self, relative: &Path) -> bool {
        if let Some(name) = relative.file_name().and_then(|n| n.to_str()) {
            if EXCLUDED_DIRS.contains(&name) {
                return true;
            }
        }

        EXCLUDED_PREFIXES
            .iter()
            .any(|prefix| relative.starts_with(prefix))
    }
}
