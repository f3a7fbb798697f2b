use std::path::Path;

use analysis_toolkit::bin_common::{
    init_tracing, init_tracing_with_file, load_config_from_env, parse_args, ConfigType,
};
use analysis_toolkit::dataset_clean::{sanitize_column_name, Table};
use analysis_toolkit::dataset_db::DatasetDatabase;
use analysis_toolkit::project_config::AppConfig;
use anyhow::{bail, Context, Result};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = load_config_from_env(ConfigType::Project);
    let config = AppConfig::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    match &config.logging.log_path {
        Some(path) => init_tracing_with_file(path)?,
        None => init_tracing(),
    }

    let args = parse_args();
    let Some(file_name) = args.first() else {
        bail!("Usage: load_dataset <file.csv> [table_name]");
    };

    let cleaned_path = Path::new(&config.paths.cleaned_data_dir).join(file_name);
    let table = Table::from_csv_path(&cleaned_path)
        .with_context(|| format!("Failed to read {}", cleaned_path.display()))?;

    // Table name defaults to the sanitized file stem
    let table_name = match args.get(1) {
        Some(name) => name.clone(),
        None => {
            let stem = Path::new(file_name)
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| file_name.clone());
            sanitize_column_name(&stem)
        }
    };

    // SQLite creates the file but not its parent directory
    if let Some(db_file) = config.database.url.strip_prefix("sqlite://") {
        if db_file != ":memory:" {
            if let Some(parent) = Path::new(db_file).parent() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    let db = DatasetDatabase::new(&config.database.url).await?;

    let source = cleaned_path.display().to_string();
    let inserted = db.load_table(&table_name, &source, &table).await?;

    info!("Loaded {} rows into table {}", inserted, table_name);

    db.close().await;

    Ok(())
}
