//! Data Analysis Toolkit - Main Library
//!
//! This crate ties the workspace libraries together for the binary
//! executables: working-tree cleanup, raw-to-cleaned CSV
//! transformation, and dataset loading into the project database.
//!
//! ## Usage in Binaries
//!
//! ```rust
//! use analysis_toolkit::bin_common::{load_config_from_env, ConfigType};
//! use analysis_toolkit::tree_clean::TreeCleaner;
//! ```

// Re-export workspace libraries for convenience
pub use dataset_clean;
pub use dataset_db;
pub use project_config;
pub use tree_clean;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables

    pub mod cli;
    pub mod logging;

    pub use cli::{load_config_from_env, parse_args, ConfigType};
    pub use logging::{init_tracing, init_tracing_with_file};
}
