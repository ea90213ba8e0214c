//! Infrastructure adapters for featgen.
//!
//! This crate implements the ports defined in `featgen_core::application::ports`
//! and ships the built-in feature layout. It contains all I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use builtin_templates::{CATALOG, FEATURE_TREE};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
