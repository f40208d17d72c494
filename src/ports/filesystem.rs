//! Filesystem port for file I/O operations.

use std::path::Path;

/// Error type returned by [`FileSystem`] operations.
pub type FsError = Box<dyn std::error::Error + Send + Sync>;

/// Provides filesystem access for reading and writing files.
///
/// Directory traversal goes straight to disk; only file contents pass
/// through this trait, so tests can observe or fail individual reads.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String, FsError>;

    /// Overwrites an existing file with the given contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(&self, path: &Path, contents: &str) -> Result<(), FsError>;

    /// Returns `true` if the path exists on the filesystem.
    fn exists(&self, path: &Path) -> bool;
}
