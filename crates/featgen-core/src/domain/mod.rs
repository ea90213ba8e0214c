// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for featgen.
//!
//! This module contains pure logic with no I/O. Filesystem access and the
//! tree walk itself are handled via ports (traits) defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Static data**: Trees and catalogs are `&'static` constant tables
//! - **Value objects**: `FeatureName`, `Layer`, `RenderContext` compare by value
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    content::{Content, ContentCatalog, ContentRule, Placement, Scope},
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
    render_context::RenderContext,
    structure_tree::{Entry, Node, StructureTree},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{FeatureName, Layer, NameStrictness};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn feature_name_is_trimmed_and_lowercased() {
        let name = FeatureName::parse("  Wallet \n", NameStrictness::Strict).unwrap();
        assert_eq!(name.as_str(), "wallet");
        assert_eq!(name.capitalized(), "Wallet");
    }

    #[test]
    fn capitalized_only_touches_first_char() {
        let name = FeatureName::parse("user_profile", NameStrictness::Strict).unwrap();
        assert_eq!(name.capitalized(), "User_profile");
    }

    #[test]
    fn strict_rejects_bad_names() {
        for bad in ["", "   ", "a/b", "a\\b", "..", ".hidden", "my feature", "9lives", "_x", "wal-let", "a:b"] {
            assert!(
                matches!(
                    FeatureName::parse(bad, NameStrictness::Strict),
                    Err(DomainError::InvalidFeatureName { .. })
                ),
                "accepted: {bad:?}"
            );
        }
    }

    #[test]
    fn strict_accepts_identifiers() {
        for good in ["wallet", "user_profile", "checkout2", "Payments"] {
            assert!(
                FeatureName::parse(good, NameStrictness::Strict).is_ok(),
                "rejected: {good:?}"
            );
        }
    }

    #[test]
    fn permissive_accepts_anything() {
        for raw in ["", "a/b", "..", "my feature", "wal-let"] {
            let name = FeatureName::parse(raw, NameStrictness::Permissive).unwrap();
            assert_eq!(name.as_str(), raw.trim().to_lowercase());
        }
        assert!(FeatureName::parse("", NameStrictness::Permissive).unwrap().is_empty());
    }

    #[test]
    fn strictness_from_flag() {
        assert_eq!(NameStrictness::from_strict_flag(true), NameStrictness::Strict);
        assert_eq!(NameStrictness::from_strict_flag(false), NameStrictness::Permissive);
        assert_eq!(NameStrictness::default(), NameStrictness::Strict);
    }

    #[test]
    fn layer_matches_exact_segment_only() {
        assert_eq!(Layer::from_segment("infra"), Some(Layer::Infra));
        assert_eq!(Layer::from_segment("domain"), Some(Layer::Domain));
        assert_eq!(Layer::from_segment("infrastructure"), None);
        assert_eq!(Layer::from_segment("Infra"), None);
    }

    // ========================================================================
    // Structure Tree Tests
    // ========================================================================

    const ENTRIES: &[Entry] = &[
        Entry {
            name: "domain",
            node: Node::Directory(&[
                Entry {
                    name: "repository",
                    node: Node::FileGroup(&["_repository.dart", "{feature}.repository.dart"]),
                },
                Entry {
                    name: "_domain.dart",
                    node: Node::File,
                },
            ]),
        },
        Entry {
            name: "{feature}.router.dart",
            node: Node::File,
        },
    ];

    const TREE: StructureTree = StructureTree::new(ENTRIES);

    #[test]
    fn tree_counts_files_at_every_level() {
        assert_eq!(TREE.file_count(), 4);
        assert!(!TREE.is_empty());
    }

    #[test]
    fn tree_outline_keeps_placeholders() {
        let outline = TREE.to_string();
        assert_eq!(
            outline,
            "domain/\n  repository/\n    _repository.dart\n    {feature}.repository.dart\n  _domain.dart\n{feature}.router.dart\n"
        );
    }

    // ========================================================================
    // Project Structure Tests
    // ========================================================================

    #[test]
    fn project_structure_builds_correctly() {
        let structure = ProjectStructure::new("/tmp/wallet")
            .with_directory("domain")
            .with_file("domain/_domain.dart", "export 'x';\n".into());

        assert_eq!(structure.entry_count(), 2);
        assert_eq!(structure.files().count(), 1);
        assert_eq!(structure.directories().count(), 1);
        assert!(structure.file("domain/_domain.dart").is_some());
        assert!(DomainValidator::validate_project_structure(&structure).is_ok());
    }

    #[test]
    fn project_structure_validates_duplicates() {
        let structure = ProjectStructure::new("/tmp/wallet")
            .with_file("a.dart", String::new())
            .with_file("a.dart", String::new());

        assert!(matches!(
            structure.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    #[cfg(unix)]
    fn project_structure_rejects_absolute_entries() {
        let structure = ProjectStructure::new("/tmp").with_file("/etc.router.dart", String::new());
        assert!(matches!(
            structure.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn project_structure_validates_empty() {
        let structure = ProjectStructure::new("/tmp/wallet");
        assert_eq!(structure.validate(), Err(DomainError::EmptyStructure));
    }

    #[test]
    fn project_structure_serializes_with_kind_tag() {
        let structure = ProjectStructure::new("out")
            .with_directory("domain")
            .with_file("domain/_domain.dart", String::new());
        let json = serde_json::to_value(&structure).unwrap();

        assert_eq!(json["entries"][0]["kind"], "directory");
        assert_eq!(json["entries"][1]["kind"], "file");
        assert_eq!(json["entries"][1]["path"], "domain/_domain.dart");
    }
}
