//! Live filesystem adapter using `std::fs`.

use std::path::Path;

use crate::ports::filesystem::{FileSystem, FsError};

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), FsError> {
        Ok(std::fs::write(path, contents)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_back_what_it_wrote() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.ts");
        std::fs::write(&path, "old").unwrap();

        LiveFileSystem.write(&path, "new").unwrap();
        assert_eq!(LiveFileSystem.read_to_string(&path).unwrap(), "new");
        assert!(LiveFileSystem.exists(&path));
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.ts");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(LiveFileSystem.read_to_string(&path).is_err());
    }

    #[test]
    fn missing_path_does_not_exist() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!LiveFileSystem.exists(&dir.path().join("nope")));
        assert!(LiveFileSystem.read_to_string(&dir.path().join("nope")).is_err());
    }
}
