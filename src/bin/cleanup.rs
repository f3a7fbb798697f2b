use analysis_toolkit::bin_common::{init_tracing, parse_args};
use analysis_toolkit::project_config::find_project_root;
use analysis_toolkit::tree_clean::TreeCleaner;
use anyhow::Result;
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let args = parse_args();
    let dry_run = args.iter().any(|arg| arg == "--dry-run");

    // Fall back to the invocation directory outside a project tree
    let cwd = std::env::current_dir()?;
    let root = find_project_root(&cwd).unwrap_or(cwd);

    let cleaner = TreeCleaner::new();
    let report = if dry_run {
        cleaner.scan(&root)?
    } else {
        cleaner.clean(&root)?
    };

    info!("Found {} artifacts to clean:", report.len());
    for path in &report.removed {
        let shown = path.strip_prefix(&root).unwrap_or(path);
        info!(" - {}", shown.display());
    }

    if dry_run {
        info!("Dry run completed - no files were deleted");
    } else {
        info!("Successfully cleaned project artifacts");
    }

    Ok(())
}
