pub mod content;
pub mod project_structure;
pub mod render_context;
pub mod structure_tree;

pub use crate::domain::DomainError;
pub use content::{Content, ContentCatalog, ContentRule, Placement, Scope};
pub use project_structure::ProjectStructure;
pub use render_context::RenderContext;
pub use structure_tree::{Entry, Node, StructureTree};
