//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not content
//! rules. Name and structure violations are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The base directory the feature goes into does not exist.
    #[error("Base path does not exist: {path}")]
    BaseNotFound { path: PathBuf },

    /// The base path exists but is not a directory.
    #[error("Base path is not a directory: {path}")]
    BaseNotDirectory { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared state behind a port could not be locked (poisoned).
    #[error("Filesystem state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::BaseNotFound { path } => vec![
                format!("'{}' was not found", path.display()),
                "Point at the existing 'features' folder under 'lib'".into(),
                format!("Create it first: mkdir -p {}", path.display()),
            ],
            Self::BaseNotDirectory { path } => vec![
                format!("'{}' is a file, not a directory", path.display()),
                "Pass the folder that should contain the new feature".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "Entries created before the failure were left in place".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::BaseNotFound { .. } => ErrorCategory::NotFound,
            Self::BaseNotDirectory { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
