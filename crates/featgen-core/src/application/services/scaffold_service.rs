//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Check that the base directory exists
//! 2. Render the structure tree for the feature
//! 3. Write directories and files to the filesystem
//!
//! Planning never touches the filesystem beyond the two read-only checks, so
//! `plan` alone is what the CLI uses for `--dry-run`.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, StructureRenderer},
    },
    domain::{
        DomainValidator as validator, FeatureName, FsEntry, ProjectStructure, RenderContext,
        StructureTree,
    },
    error::FeatgenResult,
};

/// Summary of a completed scaffold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    /// The created feature directory (`base/<feature>`).
    pub root: PathBuf,
    /// Number of directories created under `root`.
    pub directories: usize,
    /// Number of files written under `root`.
    pub files: usize,
}

/// Main scaffolding service.
///
/// Orchestrates the precondition check, rendering, and writing workflow.
pub struct ScaffoldService {
    tree: &'static StructureTree,
    renderer: Box<dyn StructureRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use featgen_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     &FEATURE_TREE, // &'static StructureTree
    ///     renderer,      // impl StructureRenderer
    ///     filesystem,    // impl Filesystem
    /// );
    /// ```
    pub fn new(
        tree: &'static StructureTree,
        renderer: Box<dyn StructureRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            tree,
            renderer,
            filesystem,
        }
    }

    /// Compute everything `scaffold` would write, without writing it.
    ///
    /// Fails with `BaseNotFound` / `BaseNotDirectory` before any rendering
    /// when `base` is not an existing directory.
    #[instrument(skip_all, fields(feature = %feature, base = %base.as_ref().display()))]
    pub fn plan(
        &self,
        feature: &FeatureName,
        base: impl AsRef<Path>,
    ) -> FeatgenResult<ProjectStructure> {
        let base = base.as_ref();

        self.check_base(base)?;

        let context = RenderContext::new(feature);
        let root = base.join(feature.as_str());
        let structure = self.renderer.render(self.tree, &context, &root)?;

        validator::validate_project_structure(&structure)?;

        debug!(entries = structure.entry_count(), "Structure planned");
        Ok(structure)
    }

    /// Write a planned structure to the filesystem.
    ///
    /// Entries are written in order, so a directory is always created before
    /// its contents. The first failure aborts the run and leaves whatever was
    /// already written.
    #[instrument(skip_all, fields(root = %structure.root().display()))]
    pub fn materialize(&self, structure: &ProjectStructure) -> FeatgenResult<ScaffoldReport> {
        let root = structure.root();
        self.filesystem.create_dir_all(root)?;

        let mut report = ScaffoldReport {
            root: root.to_path_buf(),
            directories: 0,
            files: 0,
        };

        for entry in structure.entries() {
            let path = root.join(entry.path());
            match entry {
                FsEntry::Directory(_) => {
                    self.filesystem.create_dir_all(&path)?;
                    report.directories += 1;
                    debug!(path = %path.display(), "Created directory");
                }
                FsEntry::File(file) => {
                    self.filesystem.write_file(&path, &file.content)?;
                    report.files += 1;
                    debug!(path = %path.display(), bytes = file.size(), "Wrote file");
                }
            }
        }

        info!(
            directories = report.directories,
            files = report.files,
            "Feature written"
        );
        Ok(report)
    }

    /// Scaffold a feature: `plan` then `materialize`.
    #[instrument(skip_all, fields(feature = %feature, base = %base.as_ref().display()))]
    pub fn scaffold(
        &self,
        feature: &FeatureName,
        base: impl AsRef<Path>,
    ) -> FeatgenResult<ScaffoldReport> {
        info!("Scaffolding feature");
        let structure = self.plan(feature, base)?;
        self.materialize(&structure)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn check_base(&self, base: &Path) -> FeatgenResult<()> {
        if !self.filesystem.exists(base) {
            return Err(ApplicationError::BaseNotFound {
                path: base.to_path_buf(),
            }
            .into());
        }
        if !self.filesystem.is_dir(base) {
            return Err(ApplicationError::BaseNotDirectory {
                path: base.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockStructureRenderer};
    use crate::domain::{Entry, NameStrictness, Node};
    use crate::error::FeatgenError;
    use mockall::predicate::*;

    const ENTRIES: &[Entry] = &[Entry {
        name: "domain",
        node: Node::FileGroup(&["{feature}_usecase.dart"]),
    }];
    static TREE: StructureTree = StructureTree::new(ENTRIES);

    fn wallet() -> FeatureName {
        FeatureName::parse("wallet", NameStrictness::Strict).unwrap()
    }

    fn planned_structure() -> ProjectStructure {
        ProjectStructure::new("/app/lib/features/wallet")
            .with_directory("domain")
            .with_file("domain/wallet_usecase.dart", String::new())
    }

    fn renderer_returning(structure: ProjectStructure) -> MockStructureRenderer {
        let mut renderer = MockStructureRenderer::new();
        renderer
            .expect_render()
            .returning(move |_, _, _| Ok(structure.clone()));
        renderer
    }

    #[test]
    fn missing_base_performs_no_mutation() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let mut renderer = MockStructureRenderer::new();
        renderer.expect_render().never();

        let service = ScaffoldService::new(&TREE, Box::new(renderer), Box::new(fs));
        let err = service.scaffold(&wallet(), "/missing").unwrap_err();

        assert!(matches!(
            err,
            FeatgenError::Application(ApplicationError::BaseNotFound { .. })
        ));
    }

    #[test]
    fn base_that_is_a_file_is_rejected() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service = ScaffoldService::new(
            &TREE,
            Box::new(MockStructureRenderer::new()),
            Box::new(fs),
        );
        let err = service.plan(&wallet(), "/app/pubspec.yaml").unwrap_err();

        assert!(matches!(
            err,
            FeatgenError::Application(ApplicationError::BaseNotDirectory { .. })
        ));
    }

    #[test]
    fn plan_renders_under_base_joined_with_feature() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_is_dir().return_const(true);

        let mut renderer = MockStructureRenderer::new();
        renderer
            .expect_render()
            .withf(|_, ctx, root| {
                ctx.feature().as_str() == "wallet" && root == Path::new("/app/features/wallet")
            })
            .times(1)
            .returning(|_, _, _| Ok(planned_structure()));

        let service = ScaffoldService::new(&TREE, Box::new(renderer), Box::new(fs));
        let structure = service.plan(&wallet(), "/app/features").unwrap();

        assert_eq!(structure.entry_count(), 2);
    }

    #[test]
    fn plan_rejects_invalid_structure() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_is_dir().return_const(true);

        let duplicated = ProjectStructure::new("/app/wallet")
            .with_directory("domain")
            .with_directory("domain");

        let service = ScaffoldService::new(
            &TREE,
            Box::new(renderer_returning(duplicated)),
            Box::new(fs),
        );

        assert!(service.plan(&wallet(), "/app").is_err());
    }

    #[test]
    fn materialize_writes_entries_in_order() {
        let mut fs = MockFilesystem::new();
        let mut seq = mockall::Sequence::new();

        fs.expect_create_dir_all()
            .with(eq(Path::new("/app/lib/features/wallet")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_create_dir_all()
            .with(eq(Path::new("/app/lib/features/wallet/domain")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .with(
                eq(Path::new("/app/lib/features/wallet/domain/wallet_usecase.dart")),
                eq(""),
            )
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(
            &TREE,
            Box::new(MockStructureRenderer::new()),
            Box::new(fs),
        );
        let report = service.materialize(&planned_structure()).unwrap();

        assert_eq!(
            report,
            ScaffoldReport {
                root: PathBuf::from("/app/lib/features/wallet"),
                directories: 1,
                files: 1,
            }
        );
    }

    #[test]
    fn write_failure_stops_the_run() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_is_dir().return_const(true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(1).returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });

        let structure = planned_structure().with_file("domain/second.dart", String::new());
        let service = ScaffoldService::new(
            &TREE,
            Box::new(renderer_returning(structure)),
            Box::new(fs),
        );

        let err = service.scaffold(&wallet(), "/app/lib/features").unwrap_err();
        assert!(matches!(
            err,
            FeatgenError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
