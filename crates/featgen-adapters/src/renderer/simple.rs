//! Catalog-driven structure renderer.

use std::path::{Path, PathBuf};

use featgen_core::{
    application::ports::StructureRenderer,
    domain::{
        ContentCatalog, DomainError, Entry, Layer, Node, Placement, ProjectStructure,
        RenderContext, StructureTree,
    },
    error::FeatgenResult,
};
use tracing::{instrument, trace};

use crate::builtin_templates::CATALOG;

/// Renderer that walks a [`StructureTree`] and fills every file from a
/// [`ContentCatalog`] using plain placeholder substitution.
pub struct SimpleRenderer {
    catalog: &'static ContentCatalog,
}

impl SimpleRenderer {
    /// Create a renderer backed by the built-in catalog.
    pub fn new() -> Self {
        Self::with_catalog(&CATALOG)
    }

    pub fn with_catalog(catalog: &'static ContentCatalog) -> Self {
        Self { catalog }
    }

    fn walk(
        &self,
        entries: &[Entry],
        ctx: &RenderContext,
        dir: &Path,
        layer: Option<Layer>,
        structure: &mut ProjectStructure,
    ) {
        for entry in entries {
            let path = dir.join(ctx.render_name(entry.name));

            match entry.node {
                Node::Directory(children) => {
                    let layer = layer.or(Layer::from_segment(entry.name));
                    structure.add_directory(&path);
                    self.walk(children, ctx, &path, layer, structure);
                }
                Node::FileGroup(names) => {
                    let layer = layer.or(Layer::from_segment(entry.name));
                    structure.add_directory(&path);
                    for name in names {
                        let content = self.catalog.resolve(name, Placement::Grouped, layer);
                        trace!(file = name, ?layer, ?content, "grouped file");
                        structure.add_file(path.join(ctx.render_name(name)), content.render(ctx));
                    }
                }
                Node::File => {
                    let content = self
                        .catalog
                        .resolve(entry.name, Placement::Standalone, layer);
                    trace!(file = entry.name, ?layer, ?content, "standalone file");
                    structure.add_file(path, content.render(ctx));
                }
            }
        }
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(feature = %context.feature(), root = %output_root.display()))]
    fn render(
        &self,
        tree: &StructureTree,
        context: &RenderContext,
        output_root: &Path,
    ) -> FeatgenResult<ProjectStructure> {
        if tree.is_empty() {
            return Err(DomainError::EmptyStructure.into());
        }

        let mut structure = ProjectStructure::new(output_root);
        self.walk(tree.entries(), context, &PathBuf::new(), None, &mut structure);

        Ok(structure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use featgen_core::domain::{Content, ContentRule, FeatureName, NameStrictness, Scope};

    const GROUPED: &[ContentRule] = &[ContentRule {
        file: "_index.dart",
        scope: Scope::Layer(Layer::Infra),
        content: Content::Exports(&["export '{feature}.impl.dart';"]),
    }];
    const STANDALONE: &[ContentRule] = &[ContentRule {
        file: "{feature}.dart",
        scope: Scope::Any,
        content: Content::Template("class {Feature} {}"),
    }];
    static TEST_CATALOG: ContentCatalog = ContentCatalog::new(GROUPED, STANDALONE);

    const NESTED: &[Entry] = &[Entry {
        name: "repository",
        node: Node::FileGroup(&["_index.dart", "{feature}.impl.dart"]),
    }];
    const ENTRIES: &[Entry] = &[
        Entry {
            name: "infra",
            node: Node::Directory(NESTED),
        },
        Entry {
            name: "domain",
            node: Node::Directory(NESTED),
        },
        Entry {
            name: "{feature}.dart",
            node: Node::File,
        },
    ];
    static TREE: StructureTree = StructureTree::new(ENTRIES);

    fn ctx(name: &str) -> RenderContext {
        RenderContext::new(&FeatureName::parse(name, NameStrictness::Strict).unwrap())
    }

    fn render(name: &str) -> ProjectStructure {
        SimpleRenderer::with_catalog(&TEST_CATALOG)
            .render(&TREE, &ctx(name), Path::new("/out/cart"))
            .unwrap()
    }

    #[test]
    fn paths_are_relative_and_in_tree_order() {
        let structure = render("cart");
        let paths: Vec<_> = structure
            .entries()
            .iter()
            .map(|e| e.path().to_path_buf())
            .collect();

        assert_eq!(
            paths,
            [
                "infra",
                "infra/repository",
                "infra/repository/_index.dart",
                "infra/repository/cart.impl.dart",
                "domain",
                "domain/repository",
                "domain/repository/_index.dart",
                "domain/repository/cart.impl.dart",
                "cart.dart",
            ]
            .map(PathBuf::from)
        );
        assert_eq!(structure.root(), Path::new("/out/cart"));
    }

    #[test]
    fn layer_comes_from_enclosing_directory() {
        let structure = render("cart");

        assert_eq!(
            structure
                .file("infra/repository/_index.dart")
                .unwrap()
                .content,
            "export 'cart.impl.dart';\n"
        );
        assert!(structure.file("domain/repository/_index.dart").unwrap().is_empty());
    }

    #[test]
    fn unmatched_files_are_empty() {
        let structure = render("cart");
        assert!(structure.file("infra/repository/cart.impl.dart").unwrap().is_empty());
    }

    #[test]
    fn standalone_template_is_substituted() {
        let structure = render("cart");
        assert_eq!(structure.file("cart.dart").unwrap().content, "class Cart {}");
    }

    #[test]
    fn empty_tree_is_rejected() {
        static EMPTY: StructureTree = StructureTree::new(&[]);
        let result = SimpleRenderer::new().render(&EMPTY, &ctx("cart"), Path::new("/out/cart"));
        assert!(result.is_err());
    }
}
