//! Content selection for generated files.
//!
//! Which text ends up in a file depends on three things: the file's canonical
//! (pre-substitution) name, how it was declared in the tree, and which
//! [`Layer`] it sits in. The same `_repository.dart` exports the abstract
//! repository under `domain/` and the implementation under `infra/`, so the
//! lookup key is `(name, scope)` rather than the name alone.
//!
//! Rules are evaluated in declaration order; the first match wins. A file with
//! no matching rule is written empty.

use crate::domain::{entities::render_context::RenderContext, value_objects::Layer};

/// How a file was declared in the structure tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Listed inside a `Node::FileGroup`.
    Grouped,
    /// Declared as its own `Node::File` entry.
    Standalone,
}

/// Where a rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Any,
    Layer(Layer),
}

impl Scope {
    pub fn admits(&self, layer: Option<Layer>) -> bool {
        match self {
            Self::Any => true,
            Self::Layer(required) => layer == Some(*required),
        }
    }
}

/// The text a rule produces, before placeholder substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    Empty,
    /// A boilerplate body; both `{feature}` and `{Feature}` are substituted.
    Template(&'static str),
    /// Aggregator lines, each written followed by `\n`.
    Exports(&'static [&'static str]),
}

impl Content {
    pub fn render(&self, ctx: &RenderContext) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Template(text) => ctx.render(text),
            Self::Exports(lines) => lines
                .iter()
                .map(|line| {
                    let mut line = ctx.render(line);
                    line.push('\n');
                    line
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRule {
    pub file: &'static str,
    pub scope: Scope,
    pub content: Content,
}

impl ContentRule {
    fn matches(&self, file: &str, layer: Option<Layer>) -> bool {
        self.file == file && self.scope.admits(layer)
    }
}

/// Immutable rule tables, one per [`Placement`].
#[derive(Debug, Clone, Copy)]
pub struct ContentCatalog {
    grouped: &'static [ContentRule],
    standalone: &'static [ContentRule],
}

impl ContentCatalog {
    pub const fn new(grouped: &'static [ContentRule], standalone: &'static [ContentRule]) -> Self {
        Self {
            grouped,
            standalone,
        }
    }

    /// Select content for `file` (its canonical name) declared with
    /// `placement` inside `layer`.
    pub fn resolve(&self, file: &str, placement: Placement, layer: Option<Layer>) -> Content {
        let rules = match placement {
            Placement::Grouped => self.grouped,
            Placement::Standalone => self.standalone,
        };

        rules
            .iter()
            .find(|rule| rule.matches(file, layer))
            .map_or(Content::Empty, |rule| rule.content)
    }

    pub fn rules(&self, placement: Placement) -> &'static [ContentRule] {
        match placement {
            Placement::Grouped => self.grouped,
            Placement::Standalone => self.standalone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{FeatureName, NameStrictness};

    const GROUPED: &[ContentRule] = &[
        ContentRule {
            file: "_index.dart",
            scope: Scope::Layer(Layer::Infra),
            content: Content::Exports(&["export 'infra.dart';"]),
        },
        ContentRule {
            file: "_index.dart",
            scope: Scope::Layer(Layer::Domain),
            content: Content::Exports(&["export 'domain.dart';"]),
        },
        ContentRule {
            file: "{feature}.dart",
            scope: Scope::Any,
            content: Content::Template("class {Feature} {}\n"),
        },
    ];

    const STANDALONE: &[ContentRule] = &[ContentRule {
        file: "_{feature}.dart",
        scope: Scope::Any,
        content: Content::Exports(&["export '{feature}.a.dart';", "export '{feature}.b.dart';"]),
    }];

    const CATALOG: ContentCatalog = ContentCatalog::new(GROUPED, STANDALONE);

    fn ctx() -> RenderContext {
        RenderContext::new(&FeatureName::parse("cart", NameStrictness::Strict).unwrap())
    }

    #[test]
    fn same_name_resolves_by_layer() {
        let infra = CATALOG.resolve("_index.dart", Placement::Grouped, Some(Layer::Infra));
        let domain = CATALOG.resolve("_index.dart", Placement::Grouped, Some(Layer::Domain));

        assert_eq!(infra, Content::Exports(&["export 'infra.dart';"]));
        assert_eq!(domain, Content::Exports(&["export 'domain.dart';"]));
        assert_ne!(infra, domain);
    }

    #[test]
    fn layered_rule_does_not_match_other_layers() {
        let content = CATALOG.resolve("_index.dart", Placement::Grouped, Some(Layer::Presentation));
        assert_eq!(content, Content::Empty);
        assert_eq!(CATALOG.resolve("_index.dart", Placement::Grouped, None), Content::Empty);
    }

    #[test]
    fn placement_selects_table() {
        assert_eq!(
            CATALOG.resolve("_{feature}.dart", Placement::Grouped, None),
            Content::Empty
        );
        assert!(matches!(
            CATALOG.resolve("_{feature}.dart", Placement::Standalone, None),
            Content::Exports(_)
        ));
    }

    #[test]
    fn exports_render_one_line_each() {
        let content = CATALOG.resolve("_{feature}.dart", Placement::Standalone, None);
        assert_eq!(
            content.render(&ctx()),
            "export 'cart.a.dart';\nexport 'cart.b.dart';\n"
        );
    }

    #[test]
    fn template_renders_both_placeholders() {
        let content = CATALOG.resolve("{feature}.dart", Placement::Grouped, Some(Layer::Domain));
        assert_eq!(content.render(&ctx()), "class Cart {}\n");
    }

    #[test]
    fn empty_export_list_renders_nothing() {
        assert_eq!(Content::Exports(&[]).render(&ctx()), "");
        assert_eq!(Content::Empty.render(&ctx()), "");
    }
}
