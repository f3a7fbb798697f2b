pub mod patterns;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

pub use patterns::ArtifactPatterns;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Failed to walk directory tree: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Failed to remove {path}: {source}")]
    RemoveError {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CleanError>;

/// Outcome of a cleanup pass
#[derive(Debug, Clone, Default)]
pub struct CleanReport {
    /// Paths removed (or matched, for a dry run), in walk order
    pub removed: Vec<PathBuf>,
}

impl CleanReport {
    pub fn len(&self) -> usize {
        self.removed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }
}

/// Cleans generated artifacts out of a working tree
pub struct TreeCleaner {
    patterns: ArtifactPatterns,
}

impl TreeCleaner {
    pub fn new() -> Self {
        Self {
            patterns: ArtifactPatterns::new(),
        }
    }

    /// Collect matching artifacts without deleting anything
    pub fn scan(&self, root: impl AsRef<Path>) -> Result<CleanReport> {
        self.walk(root.as_ref(), true)
    }

    /// Remove matching artifacts, returning what was deleted
    ///
    /// Running twice in a row removes nothing the second time: every
    /// match is deleted outright and nothing regenerates them mid-walk.
    pub fn clean(&self, root: impl AsRef<Path>) -> Result<CleanReport> {
        self.walk(root.as_ref(), false)
    }

    fn walk(&self, root: &Path, dry_run: bool) -> Result<CleanReport> {
        let mut report = CleanReport::default();
        let mut walker = WalkDir::new(root).min_depth(1).into_iter();

        while let Some(entry) = walker.next() {
            let entry = entry?;
            let path = entry.path();
            let relative = path.strip_prefix(root).unwrap_or(path);

            if entry.file_type().is_dir() {
                if self.patterns.is_excluded(relative) {
                    walker.skip_current_dir();
                    continue;
                }

                let name = entry.file_name().to_string_lossy();
                if self.patterns.is_artifact_dir(&name) {
                    debug!("Removing directory: {}", path.display());
                    if !dry_run {
                        fs::remove_dir_all(path).map_err(|source| CleanError::RemoveError {
                            path: path.to_path_buf(),
                            source,
                        })?;
                    }
                    report.removed.push(path.to_path_buf());
                    // Contents went with the directory
                    walker.skip_current_dir();
                }
            } else if entry.file_type().is_file() {
                let name = entry.file_name().to_string_lossy();
                if self.patterns.is_artifact_file(&name) {
                    debug!("Removing file: {}", path.display());
                    if !dry_run {
                        fs::remove_file(path).map_err(|source| CleanError::RemoveError {
                            path: path.to_path_buf(),
                            source,
                        })?;
                    }
                    report.removed.push(path.to_path_buf());
                }
            }
        }

        Ok(report)
    }
}

impl Default for TreeCleaner {
    fn default() -> Self {
        Self::new()
    }
}
