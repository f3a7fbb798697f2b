//! Integration test: working-tree cleanup
//!
//! Exercises the cleanup pass over a realistic project layout.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use analysis_toolkit::tree_clean::TreeCleaner;
use tempfile::tempdir;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut file = File::create(path).unwrap();
    writeln!(file, "x").unwrap();
}

#[test]
fn cleanup_removes_generated_artifacts_and_nothing_else() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    // Generated artifacts
    touch(&root.join("src/__pycache__/mod.cpython.pyc"));
    touch(&root.join("build/out.bin"));
    touch(&root.join("app.log"));
    touch(&root.join("notebooks/.DS_Store"));

    // Real project content
    touch(&root.join("README.md"));
    touch(&root.join("src/pipeline.py"));
    touch(&root.join("data/raw/input.csv"));
    touch(&root.join("notebooks/exploration.ipynb"));

    let report = TreeCleaner::new().clean(root).unwrap();

    assert_eq!(report.len(), 4);
    assert!(!root.join("src/__pycache__").exists());
    assert!(!root.join("build").exists());
    assert!(!root.join("app.log").exists());
    assert!(!root.join("notebooks/.DS_Store").exists());

    // notebooks/ survives, now empty of metadata
    assert!(root.join("notebooks/exploration.ipynb").exists());
    assert!(root.join("README.md").exists());
    assert!(root.join("src/pipeline.py").exists());
    assert!(root.join("data/raw/input.csv").exists());
}

#[test]
fn cleanup_twice_is_idempotent() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    touch(&root.join("src/__pycache__/mod.pyc"));
    touch(&root.join("dist/pkg.tar.gz"));

    let cleaner = TreeCleaner::new();
    assert_eq!(cleaner.clean(root).unwrap().len(), 2);
    assert!(cleaner.clean(root).unwrap().is_empty());
}
