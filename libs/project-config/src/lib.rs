pub mod paths;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use dataset_clean::CleaningConfig;

pub use paths::find_project_root;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Project root not found within {depth} levels of {start}")]
    RootNotFound { start: PathBuf, depth: usize },

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Main project configuration, loaded from `config/config.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub cleaning: CleaningConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    pub raw_data_dir: String,
    pub cleaned_data_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file path; console-only logging when unset
    pub log_path: Option<String>,
}

impl AppConfig {
    /// Load configuration from YAML file and `.env`
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let yaml_content = std::fs::read_to_string(config_path)?;
        let mut config: AppConfig = serde_yaml::from_str(&yaml_content)?;

        // Don't fail if .env doesn't exist
        dotenv::dotenv().ok();

        // Secrets stay out of the YAML; DATABASE_URL wins when set
        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.database.url = url;
        }

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.paths.raw_data_dir.is_empty() {
            return Err(ConfigError::ValidationError(
                "paths.raw_data_dir must not be empty".to_string(),
            ));
        }

        if self.paths.cleaned_data_dir.is_empty() {
            return Err(ConfigError::ValidationError(
                "paths.cleaned_data_dir must not be empty".to_string(),
            ));
        }

        if self.paths.raw_data_dir == self.paths.cleaned_data_dir {
            return Err(ConfigError::ValidationError(
                "raw_data_dir and cleaned_data_dir must differ".to_string(),
            ));
        }

        if self.database.url.is_empty() {
            return Err(ConfigError::ValidationError(
                "database.url must not be empty (set it in YAML or via DATABASE_URL)".to_string(),
            ));
        }

        Ok(())
    }
}
