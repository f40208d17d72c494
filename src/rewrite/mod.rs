//! The import rewriter.
//!
//! Walks one root directory, skips excluded directories before descending,
//! and rewrites alias-prefixed imports in every eligible file using a
//! prefix derived from the file's depth under that root.

pub mod depth;
pub mod patterns;

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::config::RewriteConfig;
use crate::error::Error;
use crate::ports::filesystem::FileSystem;

pub use patterns::ImportPatterns;

/// What happened to a single eligible file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// No alias import was found; nothing was written.
    Unchanged,
    /// Content changed and was written back (or would be, in dry-run).
    Rewritten {
        /// Directory levels between the root and the file.
        depth: usize,
        /// Prefix substituted for the alias.
        prefix: String,
    },
    /// The file could not be read and was skipped.
    ReadFailed,
}

/// Outcome of rewriting one root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootReport {
    /// The root does not exist; nothing was visited.
    Missing {
        /// Root as configured.
        root: PathBuf,
    },
    /// The root was walked.
    Scanned {
        /// Root as configured.
        root: PathBuf,
        /// Eligible files encountered.
        files: usize,
        /// Files whose content changed.
        rewritten: usize,
        /// Files or entries that could not be read.
        failed: usize,
    },
}

impl RootReport {
    /// The root this report is about.
    #[must_use]
    pub fn root(&self) -> &Path {
        match self {
            Self::Missing { root } | Self::Scanned { root, .. } => root,
        }
    }

    /// Number of eligible files encountered.
    #[must_use]
    pub fn files(&self) -> usize {
        match self {
            Self::Missing { .. } => 0,
            Self::Scanned { files, .. } => *files,
        }
    }

    /// Number of files rewritten.
    #[must_use]
    pub fn rewritten(&self) -> usize {
        match self {
            Self::Missing { .. } => 0,
            Self::Scanned { rewritten, .. } => *rewritten,
        }
    }

    /// Number of read failures.
    #[must_use]
    pub fn failed(&self) -> usize {
        match self {
            Self::Missing { .. } => 0,
            Self::Scanned { failed, .. } => *failed,
        }
    }
}

/// Rewrites alias imports under a root, one file at a time.
pub struct Rewriter<'a> {
    config: &'a RewriteConfig,
    fs: &'a dyn FileSystem,
    patterns: ImportPatterns,
}

impl<'a> Rewriter<'a> {
    /// Create a rewriter for `config`, doing file I/O through `fs`.
    ///
    /// # Errors
    ///
    /// Returns an error if the import patterns cannot be compiled.
    pub fn new(config: &'a RewriteConfig, fs: &'a dyn FileSystem) -> Result<Self, Error> {
        let patterns = ImportPatterns::new(&config.alias)?;
        Ok(Self { config, fs, patterns })
    }

    /// Rewrite every eligible file under `root`.
    ///
    /// A missing root and unreadable files are reported on stdout and do
    /// not fail the call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] if a changed file cannot be written back;
    /// the rest of the tree is not visited.
    pub fn rewrite(&self, root: &Path) -> Result<RootReport, Error> {
        println!("Scanning {}...", root.display());
        if !self.fs.exists(root) {
            println!("Error: Path {} does not exist!", root.display());
            return Ok(RootReport::Missing { root: root.to_path_buf() });
        }

        let (mut files, mut rewritten, mut failed) = (0, 0, 0);
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_pruned(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().unwrap_or(root);
                    println!("Error reading {}: {err}", path.display());
                    failed += 1;
                    continue;
                }
            };
            if !self.is_eligible(&entry) {
                continue;
            }

            files += 1;
            match self.rewrite_file(root, entry.path())? {
                FileOutcome::Unchanged => {}
                FileOutcome::Rewritten { .. } => rewritten += 1,
                FileOutcome::ReadFailed => failed += 1,
            }
        }

        info!(root = %root.display(), files, rewritten, failed, "root done");
        Ok(RootReport::Scanned { root: root.to_path_buf(), files, rewritten, failed })
    }

    /// Rewrite a single file that lives somewhere under `root`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] if the changed content cannot be written.
    pub fn rewrite_file(&self, root: &Path, path: &Path) -> Result<FileOutcome, Error> {
        let depth = depth::depth(root, path.parent().unwrap_or(root));
        let prefix = depth::prefix(depth);

        let content = match self.fs.read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                println!("Error reading {}: {err}", path.display());
                return Ok(FileOutcome::ReadFailed);
            }
        };

        let new_content = self.patterns.apply(&content, &prefix);
        if new_content.as_ref() == content.as_str() {
            debug!(path = %path.display(), "no alias imports");
            return Ok(FileOutcome::Unchanged);
        }

        if self.config.dry_run {
            println!(
                "Would fix imports in {} (depth={depth}, prefix={prefix})",
                path.display()
            );
        } else {
            self.fs
                .write(path, &new_content)
                .map_err(|source| Error::Write { path: path.to_path_buf(), source })?;
            println!("Fixed imports in {} (depth={depth}, prefix={prefix})", path.display());
        }
        Ok(FileOutcome::Rewritten { depth, prefix })
    }

    fn is_pruned(&self, entry: &DirEntry) -> bool {
        let pruned = entry.depth() > 0
            && entry.file_type().is_dir()
            && self.config.is_excluded(&entry.file_name().to_string_lossy());
        if pruned {
            debug!(path = %entry.path().display(), "skipping excluded directory");
        }
        pruned
    }

    fn is_eligible(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_file()
            && self.config.is_eligible(&entry.file_name().to_string_lossy())
    }
}
