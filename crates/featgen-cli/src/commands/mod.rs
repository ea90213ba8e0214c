//! Subcommand handlers, one module per `Commands` variant.

pub mod completions;
pub mod config;
pub mod init;
pub mod new;
pub mod tree;
