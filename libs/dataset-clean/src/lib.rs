pub mod sanitize;
pub mod table;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

pub use sanitize::sanitize_column_name;
pub use table::Table;

#[derive(Error, Debug)]
pub enum CleanDataError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Record {row} has {found} fields, expected {expected}")]
    RaggedRecord {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, CleanDataError>;

/// Switches for the individual cleaning steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningConfig {
    /// Rewrite headers as lowercase snake_case identifiers
    #[serde(default = "default_true")]
    pub sanitize_columns: bool,
    /// Drop records with missing (empty) values
    #[serde(default = "default_true")]
    pub drop_na: bool,
    /// Strip leading/trailing whitespace from every field
    #[serde(default = "default_true")]
    pub strip_strings: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            sanitize_columns: true,
            drop_na: true,
            strip_strings: true,
        }
    }
}

/// Apply the configured cleaning steps to a table in place
pub fn clean_table(table: &mut Table, config: &CleaningConfig) {
    if config.sanitize_columns {
        table.headers = table
            .headers
            .iter()
            .map(|h| sanitize_column_name(h))
            .collect();
    }

    if config.drop_na {
        table
            .records
            .retain(|record| !record.iter().any(|field| field.trim().is_empty()));
    }

    if config.strip_strings {
        for record in &mut table.records {
            for field in record.iter_mut() {
                let trimmed = field.trim();
                if trimmed.len() != field.len() {
                    *field = trimmed.to_string();
                }
            }
        }
    }
}

/// Clean a raw CSV file into a cleaned one
pub fn clean_csv(
    raw_path: impl AsRef<Path>,
    cleaned_path: impl AsRef<Path>,
    config: &CleaningConfig,
) -> Result<Table> {
    let raw_path = raw_path.as_ref();
    let cleaned_path = cleaned_path.as_ref();

    let mut table = Table::from_csv_path(raw_path)?;
    let raw_rows = table.row_count();

    clean_table(&mut table, config);

    if let Some(parent) = cleaned_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    table.to_csv_path(cleaned_path)?;

    info!(
        "Cleaned {} -> {} ({} rows in, {} rows out)",
        raw_path.display(),
        cleaned_path.display(),
        raw_rows,
        table.row_count()
    );

    Ok(table)
}
