//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `featgen-adapters` crate provides implementations.

use crate::domain::{ProjectStructure, RenderContext, StructureTree};
use crate::error::FeatgenResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `featgen_adapters::filesystem::LocalFilesystem` (production)
/// - `featgen_adapters::filesystem::MemoryFilesystem` (testing, dry runs)
///
/// ## Design Notes
///
/// - Both mutating operations are idempotent: existing directories are left
///   alone and existing files are overwritten.
/// - No removal: a failed run leaves what it already created.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> FeatgenResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> FeatgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for turning a structure tree into concrete paths and contents.
///
/// Implemented by:
/// - `featgen_adapters::renderer::SimpleRenderer` (catalog-driven substitution)
#[cfg_attr(test, mockall::automock)]
pub trait StructureRenderer: Send + Sync {
    /// Render a tree into a project structure.
    ///
    /// # Arguments
    ///
    /// * `tree` - The structure description to walk
    /// * `context` - Placeholder values for names and contents
    /// * `output_root` - Directory the feature is created in (`base/<feature>`)
    fn render(
        &self,
        tree: &StructureTree,
        context: &RenderContext,
        output_root: &Path,
    ) -> FeatgenResult<ProjectStructure>;
}
