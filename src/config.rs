//! Rewrite configuration.
//!
//! Values come from built-in defaults, an optional YAML file, then the
//! command line, with later sources overriding earlier ones.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::Cli;
use crate::error::Error;

/// Alias token replaced when none is configured.
pub const DEFAULT_ALIAS: &str = "@/";

/// Extensions (without the dot) eligible for rewriting by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &["ts", "tsx"];

/// Directory names pruned from traversal by default.
pub const DEFAULT_EXCLUDE: &[&str] = &["node_modules", ".next"];

/// Everything one run needs: which roots to visit and how to rewrite them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteConfig {
    /// Root directories, processed in this order.
    pub roots: Vec<PathBuf>,
    /// Token that marks a root-relative import.
    pub alias: String,
    /// Eligible file extensions, without the leading dot.
    pub extensions: Vec<String>,
    /// Directory names that are never descended into.
    pub exclude: Vec<String>,
    /// When set, changes are reported but not written.
    pub dry_run: bool,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            alias: DEFAULT_ALIAS.to_string(),
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
            exclude: DEFAULT_EXCLUDE.iter().map(ToString::to_string).collect(),
            dry_run: false,
        }
    }
}

/// On-disk YAML shape. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Roots; relative entries are resolved against the file's directory.
    #[serde(default)]
    pub roots: Vec<PathBuf>,
    /// Alias token.
    pub alias: Option<String>,
    /// Eligible extensions.
    pub extensions: Option<Vec<String>>,
    /// Excluded directory names.
    pub exclude: Option<Vec<String>>,
    /// Dry-run switch.
    pub dry_run: Option<bool>,
}

impl ConfigFile {
    /// Read and parse a YAML config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| Error::Config { path: path.to_path_buf(), source })?;
        let mut file: Self = serde_yaml::from_str(&content)
            .map_err(|source| Error::ConfigParse { path: path.to_path_buf(), source })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for root in &mut file.roots {
            if root.is_relative() {
                *root = base.join(&*root);
            }
        }
        Ok(file)
    }
}

impl RewriteConfig {
    /// Build the configuration for a parsed command line.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file fails to load or the merged
    /// result is unusable (see [`RewriteConfig::validate`]).
    pub fn from_cli(cli: &Cli) -> Result<Self, Error> {
        let mut config = Self::default();
        if let Some(path) = &cli.config {
            config.apply_file(ConfigFile::load(path)?);
        }
        config.apply_cli(cli);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    fn apply_file(&mut self, file: ConfigFile) {
        self.roots.extend(file.roots);
        if let Some(alias) = file.alias {
            self.alias = alias;
        }
        if let Some(extensions) = file.extensions {
            self.extensions = extensions;
        }
        if let Some(exclude) = file.exclude {
            self.exclude = exclude;
        }
        if let Some(dry_run) = file.dry_run {
            self.dry_run = dry_run;
        }
    }

    fn apply_cli(&mut self, cli: &Cli) {
        self.roots.extend(cli.roots.iter().cloned());
        if let Some(alias) = &cli.alias {
            self.alias.clone_from(alias);
        }
        if !cli.extensions.is_empty() {
            self.extensions.clone_from(&cli.extensions);
        }
        if !cli.exclude.is_empty() {
            self.exclude.clone_from(&cli.exclude);
        }
        self.dry_run |= cli.dry_run;
    }

    /// Strip leading dots from extensions and drop empty entries.
    fn normalize(&mut self) {
        self.extensions = self
            .extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();
        self.exclude.retain(|name| !name.is_empty());
    }

    /// Check that the configuration can drive a run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when there are no roots, the alias is
    /// empty, or no extensions are eligible.
    pub fn validate(&self) -> Result<(), Error> {
        if self.roots.is_empty() {
            return Err(Error::InvalidConfig(
                "no root directories given (pass ROOTS or set `roots` in --config)".to_string(),
            ));
        }
        if self.alias.is_empty() {
            return Err(Error::InvalidConfig("alias token must not be empty".to_string()));
        }
        if self.extensions.is_empty() {
            return Err(Error::InvalidConfig("at least one extension is required".to_string()));
        }
        Ok(())
    }

    /// Returns `true` if `file_name` ends in `.<ext>` for an eligible extension.
    #[must_use]
    pub fn is_eligible(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| {
            file_name
                .strip_suffix(ext.as_str())
                .is_some_and(|stem| stem.ends_with('.'))
        })
    }

    /// Returns `true` if a directory with this name must not be descended into.
    #[must_use]
    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.exclude.iter().any(|name| name == dir_name)
    }
}
