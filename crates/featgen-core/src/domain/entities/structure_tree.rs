//! Declarative description of a feature's directory layout.
//!
//! A [`StructureTree`] is an ordered list of [`Entry`] values. Each entry
//! names a path segment (which may contain the `{feature}` placeholder) and a
//! [`Node`] saying what lives there:
//!
//! ```text
//! Directory(children) ── subdirectory, walk `children`
//! FileGroup(names)    ── subdirectory holding the listed leaf files
//! File                ── a single leaf file
//! ```
//!
//! Trees are meant to be `static` data; every field is `&'static` so a whole
//! tree can be written as a constant expression.

use std::fmt;

/// One named position in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub name: &'static str,
    pub node: Node,
}

/// What an [`Entry`] materializes as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Directory(&'static [Entry]),
    FileGroup(&'static [&'static str]),
    File,
}

/// Root of a structure description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureTree {
    entries: &'static [Entry],
}

impl StructureTree {
    pub const fn new(entries: &'static [Entry]) -> Self {
        Self { entries }
    }

    pub const fn entries(&self) -> &'static [Entry] {
        self.entries
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of leaf files the tree describes, across every level.
    pub fn file_count(&self) -> usize {
        fn count(entries: &[Entry]) -> usize {
            entries
                .iter()
                .map(|e| match e.node {
                    Node::Directory(children) => count(children),
                    Node::FileGroup(names) => names.len(),
                    Node::File => 1,
                })
                .sum()
        }
        count(self.entries)
    }
}

impl fmt::Display for StructureTree {
    /// Indented outline of the raw (unsubstituted) tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_level(f: &mut fmt::Formatter<'_>, entries: &[Entry], depth: usize) -> fmt::Result {
            for entry in entries {
                let indent = "  ".repeat(depth);
                match entry.node {
                    Node::Directory(children) => {
                        writeln!(f, "{indent}{}/", entry.name)?;
                        write_level(f, children, depth + 1)?;
                    }
                    Node::FileGroup(names) => {
                        writeln!(f, "{indent}{}/", entry.name)?;
                        for name in names {
                            writeln!(f, "{indent}  {name}")?;
                        }
                    }
                    Node::File => writeln!(f, "{indent}{}", entry.name)?,
                }
            }
            Ok(())
        }
        write_level(f, self.entries, 0)
    }
}
