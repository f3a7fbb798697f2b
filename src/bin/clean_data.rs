use std::path::Path;

use analysis_toolkit::bin_common::{
    init_tracing, init_tracing_with_file, load_config_from_env, parse_args, ConfigType,
};
use analysis_toolkit::dataset_clean::clean_csv;
use analysis_toolkit::project_config::AppConfig;
use anyhow::{bail, Context, Result};
use tracing::info;

fn main() -> Result<()> {
    let config_path = load_config_from_env(ConfigType::Project);
    let config = AppConfig::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    match &config.logging.log_path {
        Some(path) => init_tracing_with_file(path)?,
        None => init_tracing(),
    }

    let args = parse_args();
    let Some(file_name) = args.first() else {
        bail!("Usage: clean_data <file.csv>");
    };

    let raw_path = Path::new(&config.paths.raw_data_dir).join(file_name);
    let cleaned_path = Path::new(&config.paths.cleaned_data_dir).join(file_name);

    info!("Cleaning {}", raw_path.display());

    let table = clean_csv(&raw_path, &cleaned_path, &config.cleaning)
        .with_context(|| format!("Failed to clean {}", raw_path.display()))?;

    info!(
        "Wrote {} cleaned rows ({} columns) to {}",
        table.row_count(),
        table.column_count(),
        cleaned_path.display()
    );

    Ok(())
}
