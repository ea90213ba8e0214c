//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use featgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{FeatgenError, FeatgenResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> FeatgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> FeatgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> FeatgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let nested = tmp.path().join("a/b/c");

        fs.create_dir_all(&nested).unwrap();
        fs.create_dir_all(&nested).unwrap();

        assert!(fs.is_dir(&nested));
    }

    #[test]
    fn write_file_overwrites() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("x.dart");

        fs.write_file(&file, "first").unwrap();
        fs.write_file(&file, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "second");
        assert!(fs.exists(&file));
        assert!(!fs.is_dir(&file));
    }

    #[test]
    fn write_into_missing_parent_is_filesystem_error() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let err = fs
            .write_file(&tmp.path().join("missing/x.dart"), "")
            .unwrap_err();

        assert!(matches!(
            err,
            FeatgenError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
