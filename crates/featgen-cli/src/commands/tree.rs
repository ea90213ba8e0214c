//! Implementation of the `featgen tree` command.
//!
//! Without a feature name the raw layout is printed, placeholders and all.
//! With one, the layout is rendered exactly as `new` would plan it, but
//! nothing on disk is consulted.

use std::path::Path;

use featgen_adapters::{FEATURE_TREE, SimpleRenderer};
use featgen_core::{
    application::ports::StructureRenderer,
    domain::{
        DomainValidator, Entry, FeatureName, FsEntry, NameStrictness, Node, ProjectStructure,
        RenderContext,
    },
    error::FeatgenError,
};
use serde::Serialize;

use crate::{
    cli::{TreeArgs, TreeFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// One line of `--format json` output when no feature is given.
#[derive(Debug, Serialize)]
struct RawEntry {
    path: String,
    kind: &'static str,
}

pub fn execute(args: TreeArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let Some(name) = args.feature else {
        return print_raw(args.format, output);
    };

    let strictness = NameStrictness::from_strict_flag(config.naming.strict);
    let feature = FeatureName::parse(&name, strictness).map_err(FeatgenError::from)?;
    let structure = plan_in_memory(&feature)?;

    match args.format {
        TreeFormat::Tree => {
            output.header(&format!("{}/", feature))?;
            for line in outline(&structure, 1) {
                output.print(&line)?;
            }
        }
        TreeFormat::List => {
            for line in paths(&structure) {
                output.print(&line)?;
            }
        }
        TreeFormat::Json => output.json(&structure)?,
    }

    Ok(())
}

/// Render the built-in tree for `feature` relative to `feature/`, applying
/// the same structure checks `new` does before writing.
fn plan_in_memory(feature: &FeatureName) -> CliResult<ProjectStructure> {
    let context = RenderContext::new(feature);
    let structure =
        SimpleRenderer::new().render(&FEATURE_TREE, &context, Path::new(feature.as_str()))?;
    DomainValidator::validate_project_structure(&structure).map_err(FeatgenError::from)?;
    Ok(structure)
}

fn print_raw(format: TreeFormat, output: &OutputManager) -> CliResult<()> {
    match format {
        TreeFormat::Tree => {
            output.header("{feature}/")?;
            for line in FEATURE_TREE.to_string().lines() {
                output.print(&format!("  {line}"))?;
            }
        }
        TreeFormat::List => {
            for entry in raw_entries() {
                output.print(&entry.path)?;
            }
        }
        TreeFormat::Json => output.json(&raw_entries())?,
    }
    Ok(())
}

/// Every position in the built-in tree, unsubstituted, directories first.
fn raw_entries() -> Vec<RawEntry> {
    fn walk(entries: &[Entry], prefix: &str, out: &mut Vec<RawEntry>) {
        for entry in entries {
            let path = format!("{prefix}{}", entry.name);
            match entry.node {
                Node::Directory(children) => {
                    out.push(RawEntry {
                        path: format!("{path}/"),
                        kind: "directory",
                    });
                    walk(children, &format!("{path}/"), out);
                }
                Node::FileGroup(names) => {
                    out.push(RawEntry {
                        path: format!("{path}/"),
                        kind: "directory",
                    });
                    out.extend(names.iter().map(|name| RawEntry {
                        path: format!("{path}/{name}"),
                        kind: "file",
                    }));
                }
                Node::File => out.push(RawEntry { path, kind: "file" }),
            }
        }
    }

    let mut out = Vec::new();
    walk(FEATURE_TREE.entries(), "", &mut out);
    out
}

/// Relative paths of a planned structure, directories suffixed with `/`.
pub(crate) fn paths(structure: &ProjectStructure) -> Vec<String> {
    structure
        .entries()
        .iter()
        .map(|entry| {
            let path = entry.path().display().to_string();
            match entry {
                FsEntry::Directory(_) => format!("{path}/"),
                FsEntry::File(_) => path,
            }
        })
        .collect()
}

/// Indented outline of a planned structure, starting at `depth`.
pub(crate) fn outline(structure: &ProjectStructure, depth: usize) -> Vec<String> {
    structure
        .entries()
        .iter()
        .map(|entry| {
            let path = entry.path();
            let level = path.components().count().saturating_sub(1) + depth;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let suffix = if matches!(entry, FsEntry::Directory(_)) { "/" } else { "" };
            format!("{}{name}{suffix}", "  ".repeat(level))
        })
        .collect()
}
