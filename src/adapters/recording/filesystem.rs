//! Recording adapter for the `FileSystem` port.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::filesystem::{FileSystem, FsError};

/// One call made through a [`RecordingFileSystem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsCall {
    /// Port method name (`read_to_string`, `write` or `exists`).
    pub method: &'static str,
    /// Path the call was made with.
    pub path: PathBuf,
    /// Whether the inner call succeeded (`exists` records its answer).
    pub ok: bool,
}

/// Records filesystem interactions while delegating to an inner implementation.
pub struct RecordingFileSystem {
    inner: Box<dyn FileSystem>,
    calls: Mutex<Vec<FsCall>>,
}

impl RecordingFileSystem {
    /// Creates a new recording filesystem wrapping the given implementation.
    #[must_use]
    pub fn new(inner: Box<dyn FileSystem>) -> Self {
        Self { inner, calls: Mutex::new(Vec::new()) }
    }

    /// Returns every call recorded so far, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if a previous holder of the call log panicked.
    #[must_use]
    pub fn calls(&self) -> Vec<FsCall> {
        self.calls.lock().expect("call log lock poisoned").clone()
    }

    /// Returns the paths passed to `method`, oldest first.
    #[must_use]
    pub fn paths_for(&self, method: &str) -> Vec<PathBuf> {
        self.calls().into_iter().filter(|c| c.method == method).map(|c| c.path).collect()
    }

    fn record(&self, method: &'static str, path: &Path, ok: bool) {
        let call = FsCall { method, path: path.to_path_buf(), ok };
        self.calls.lock().expect("call log lock poisoned").push(call);
    }
}

impl FileSystem for RecordingFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        let result = self.inner.read_to_string(path);
        self.record("read_to_string", path, result.is_ok());
        result
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), FsError> {
        let result = self.inner.write(path, contents);
        self.record("write", path, result.is_ok());
        result
    }

    fn exists(&self, path: &Path) -> bool {
        let result = self.inner.exists(path);
        self.record("exists", path, result);
        result
    }
}
