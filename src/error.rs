//! Fatal errors.
//!
//! Per-file read failures are not errors at this level: the rewriter reports
//! them and moves on. Everything here ends the run.

use std::path::PathBuf;

/// Errors that abort an `unalias` run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Command-line arguments could not be parsed (includes `--help`).
    #[error(transparent)]
    Cli(#[from] clap::Error),

    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Config {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid YAML for [`crate::config::ConfigFile`].
    #[error("failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },

    /// The merged configuration cannot be used.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An import pattern failed to compile.
    #[error("failed to build import pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A rewritten file could not be written back.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Path of the file being written.
        path: PathBuf,
        /// Error reported by the filesystem.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
