//! Built-in feature structure and file contents.
//!
//! This module ships the one layout featgen knows how to produce: a layered
//! Flutter feature (`domain`, `external`, `infra`, `presentation`) with
//! `_*.dart` barrel files re-exporting each folder.
//!
//! Everything here is `static` data. [`FEATURE_TREE`] describes the folders and
//! files, [`CATALOG`] decides what each file contains.
//!
//! # Content rules
//!
//! Files listed inside a folder group (`Node::FileGroup`) resolve against the
//! grouped rules: the four boilerplate classes by name, and the
//! `_repository.dart` / `_datasource.dart` barrels by name *and* layer. Any
//! other grouped file is written empty (`_usecase.dart` included).
//!
//! Files declared on their own (`Node::File`) resolve against the standalone
//! rules: the barrel export table first, then the router and page templates.

use featgen_core::domain::{
    Content, ContentCatalog, ContentRule, Entry, Layer, Node, Scope, StructureTree,
};

// ── Templates ─────────────────────────────────────────────────────────────────

pub const ROUTER_TEMPLATE: &str = r#"
import 'package:go_router/go_router.dart';

import '_{feature}.dart';

extension FullPath on {Feature}RoutesEnum {
  String get fullPath => '${{Feature}Router.basePath}/$routePath';
}

enum {Feature}RoutesEnum {
  {feature}('{feature}', '{feature}');

  const {Feature}RoutesEnum(
    this.routePath,
    this.routeName,
  );

  final String routePath;
  final String routeName;
}

class {Feature}Router {
  {Feature}Router._();

  static const String basePath = '/{feature}';

  static List<RouteBase> routes = [
    GoRoute(
      name: {Feature}RoutesEnum.{feature}.routeName,
      path: {Feature}RoutesEnum.{feature}.fullPath,
      builder: (context, state) => const {Feature}Page(),
    ),
  ];
}
"#;

pub const PAGE_TEMPLATE: &str = r#"
import 'package:flutter/material.dart';

class {Feature}Page extends StatelessWidget {
  const {Feature}Page({super.key});

  @override
  Widget build(BuildContext context) {
    return const Scaffold();
  }
}
"#;

pub const REPOSITORY_TEMPLATE: &str = r#"
abstract class {Feature}Repository {}
"#;

pub const REPOSITORY_IMPL_TEMPLATE: &str = r#"
import '../../_{feature}.dart';

class {Feature}RepositoryImpl implements {Feature}Repository {}
"#;

pub const DATASOURCE_TEMPLATE: &str = r#"
abstract class {Feature}Datasource {}
"#;

pub const DATASOURCE_IMPL_TEMPLATE: &str = r#"
import '../../_{feature}.dart';

class {Feature}DatasourceImpl implements {Feature}Datasource {}
"#;

// ── Tree ──────────────────────────────────────────────────────────────────────

const DOMAIN: &[Entry] = &[
    Entry {
        name: "repository",
        node: Node::FileGroup(&["_repository.dart", "{feature}.repository.dart"]),
    },
    Entry {
        name: "usecase",
        node: Node::FileGroup(&["_usecase.dart"]),
    },
    Entry {
        name: "_domain.dart",
        node: Node::File,
    },
];

const EXTERNAL: &[Entry] = &[
    Entry {
        name: "datasource",
        node: Node::FileGroup(&["_datasource.dart", "{feature}.datasource.impl.dart"]),
    },
    Entry {
        name: "_external.dart",
        node: Node::File,
    },
];

const INFRA: &[Entry] = &[
    Entry {
        name: "datasource",
        node: Node::FileGroup(&["_datasource.dart", "{feature}.datasource.dart"]),
    },
    Entry {
        name: "repository",
        node: Node::FileGroup(&["_repository.dart", "{feature}.repository.impl.dart"]),
    },
    Entry {
        name: "_infra.dart",
        node: Node::File,
    },
];

const CONTROLLER: &[Entry] = &[
    Entry {
        name: "_controller.dart",
        node: Node::File,
    },
    Entry {
        name: "{feature}.cubit.dart",
        node: Node::File,
    },
    Entry {
        name: "{feature}.state.dart",
        node: Node::File,
    },
];

const PAGE: &[Entry] = &[
    Entry {
        name: "_page.dart",
        node: Node::File,
    },
    Entry {
        name: "{feature}.page.dart",
        node: Node::File,
    },
];

const WIDGET: &[Entry] = &[Entry {
    name: "_widget.dart",
    node: Node::File,
}];

const PRESENTATION: &[Entry] = &[
    Entry {
        name: "controller",
        node: Node::Directory(CONTROLLER),
    },
    Entry {
        name: "page",
        node: Node::Directory(PAGE),
    },
    Entry {
        name: "widget",
        node: Node::Directory(WIDGET),
    },
    Entry {
        name: "_presentation.dart",
        node: Node::File,
    },
];

const FEATURE: &[Entry] = &[
    Entry {
        name: "domain",
        node: Node::Directory(DOMAIN),
    },
    Entry {
        name: "external",
        node: Node::Directory(EXTERNAL),
    },
    Entry {
        name: "infra",
        node: Node::Directory(INFRA),
    },
    Entry {
        name: "presentation",
        node: Node::Directory(PRESENTATION),
    },
    Entry {
        name: "_{feature}.dart",
        node: Node::File,
    },
    Entry {
        name: "{feature}.router.dart",
        node: Node::File,
    },
    Entry {
        name: "{feature}.setup.locator.dart",
        node: Node::File,
    },
];

/// The layered feature layout created under `base/<feature>`.
pub static FEATURE_TREE: StructureTree = StructureTree::new(FEATURE);

// ── Content ───────────────────────────────────────────────────────────────────

const GROUPED: &[ContentRule] = &[
    ContentRule {
        file: "{feature}.repository.dart",
        scope: Scope::Any,
        content: Content::Template(REPOSITORY_TEMPLATE),
    },
    ContentRule {
        file: "{feature}.datasource.impl.dart",
        scope: Scope::Any,
        content: Content::Template(DATASOURCE_IMPL_TEMPLATE),
    },
    ContentRule {
        file: "{feature}.datasource.dart",
        scope: Scope::Any,
        content: Content::Template(DATASOURCE_TEMPLATE),
    },
    ContentRule {
        file: "{feature}.repository.impl.dart",
        scope: Scope::Any,
        content: Content::Template(REPOSITORY_IMPL_TEMPLATE),
    },
    ContentRule {
        file: "_repository.dart",
        scope: Scope::Layer(Layer::Infra),
        content: Content::Exports(&["export '{feature}.repository.impl.dart';"]),
    },
    ContentRule {
        file: "_repository.dart",
        scope: Scope::Layer(Layer::Domain),
        content: Content::Exports(&["export '{feature}.repository.dart';"]),
    },
    ContentRule {
        file: "_datasource.dart",
        scope: Scope::Layer(Layer::External),
        content: Content::Exports(&["export '{feature}.datasource.impl.dart';"]),
    },
    ContentRule {
        file: "_datasource.dart",
        scope: Scope::Layer(Layer::Infra),
        content: Content::Exports(&["export '{feature}.datasource.dart';"]),
    },
];

const fn exports(file: &'static str, lines: &'static [&'static str]) -> ContentRule {
    ContentRule {
        file,
        scope: Scope::Any,
        content: Content::Exports(lines),
    }
}

const STANDALONE: &[ContentRule] = &[
    exports(
        "_{feature}.dart",
        &[
            "export '{feature}.router.dart';",
            "export '{feature}.setup.locator.dart';",
            "export 'domain/_domain.dart';",
            "export 'external/_external.dart';",
            "export 'infra/_infra.dart';",
            "export 'presentation/_presentation.dart';",
        ],
    ),
    exports(
        "_domain.dart",
        &[
            "export 'repository/_repository.dart';",
            "export 'usecase/_usecase.dart';",
        ],
    ),
    exports("_repository.dart", &["export '{feature}.repository.dart';"]),
    exports("_usecase.dart", &["export '{feature}.usecase.dart';"]),
    exports("_external.dart", &["export 'datasource/_datasource.dart';"]),
    exports(
        "_datasource.dart",
        &[
            "export '{feature}.datasource.dart';",
            "export '{feature}.datasource.impl.dart';",
        ],
    ),
    exports(
        "_infra.dart",
        &[
            "export 'datasource/_datasource.dart';",
            "export 'repository/_repository.dart';",
        ],
    ),
    exports(
        "_presentation.dart",
        &[
            "export 'controller/_controller.dart';",
            "export 'page/_page.dart';",
            "export 'widget/_widget.dart';",
        ],
    ),
    exports(
        "_controller.dart",
        &["export '{feature}.cubit.dart';", "export '{feature}.state.dart';"],
    ),
    exports("_page.dart", &["export '{feature}.page.dart';"]),
    exports("_widget.dart", &[]),
    ContentRule {
        file: "{feature}.router.dart",
        scope: Scope::Any,
        content: Content::Template(ROUTER_TEMPLATE),
    },
    ContentRule {
        file: "{feature}.page.dart",
        scope: Scope::Any,
        content: Content::Template(PAGE_TEMPLATE),
    },
];

/// Content rules for [`FEATURE_TREE`].
pub static CATALOG: ContentCatalog = ContentCatalog::new(GROUPED, STANDALONE);

#[cfg(test)]
mod tests {
    use super::*;
    use featgen_core::domain::Placement;

    #[test]
    fn tree_has_every_leaf() {
        assert_eq!(FEATURE_TREE.file_count(), 22);
    }

    #[test]
    fn templates_start_with_newline() {
        for template in [
            ROUTER_TEMPLATE,
            PAGE_TEMPLATE,
            REPOSITORY_TEMPLATE,
            REPOSITORY_IMPL_TEMPLATE,
            DATASOURCE_TEMPLATE,
            DATASOURCE_IMPL_TEMPLATE,
        ] {
            assert!(template.starts_with('\n'));
            assert!(template.ends_with("}\n"));
        }
    }

    #[test]
    fn usecase_barrel_in_group_is_empty() {
        assert_eq!(
            CATALOG.resolve("_usecase.dart", Placement::Grouped, Some(Layer::Domain)),
            Content::Empty
        );
    }

    #[test]
    fn every_standalone_barrel_has_exports() {
        fn standalone_names(entries: &[Entry], out: &mut Vec<&'static str>) {
            for entry in entries {
                match entry.node {
                    Node::Directory(children) => standalone_names(children, out),
                    Node::File => out.push(entry.name),
                    Node::FileGroup(_) => {}
                }
            }
        }

        let mut names = Vec::new();
        standalone_names(FEATURE_TREE.entries(), &mut names);

        for name in names.into_iter().filter(|n| n.starts_with('_')) {
            assert!(
                matches!(
                    CATALOG.resolve(name, Placement::Standalone, None),
                    Content::Exports(_)
                ),
                "{name} has no export rule"
            );
        }
    }
}
