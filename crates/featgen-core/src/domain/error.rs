// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside `FeatgenError`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid feature name '{name}': {reason}")]
    InvalidFeatureName { name: String, reason: String },

    // ========================================================================
    // Structure Errors
    // ========================================================================
    #[error("Duplicate path in feature structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Feature structure is empty")]
    EmptyStructure,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFeatureName { name, reason } => vec![
                format!("Feature name '{}' is invalid: {}", name, reason),
                "Use lowercase letters, digits and underscores".into(),
                "Start with a letter".into(),
                "Examples: wallet, user_profile, checkout2".into(),
                "Pass --permissive to use the name verbatim".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("Two entries resolve to '{}'", path),
                "The feature name probably collides with a fixed file name".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' would be written outside the feature directory", path),
                "Pick a feature name without a leading separator".into(),
            ],
            Self::EmptyStructure => vec!["The built-in structure tree has no entries".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidFeatureName { .. }
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Validation,
            Self::EmptyStructure => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
