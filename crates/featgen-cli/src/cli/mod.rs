//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use featgen_core::domain::NameStrictness;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

use crate::config::AppConfig;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "featgen",
    bin_name = "featgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold layered Flutter feature modules",
    long_about = "featgen creates a feature folder (domain, external, infra, \
                  presentation) with barrel files, a router, a page and \
                  repository/datasource stubs already wired to the feature name.",
    after_help = "EXAMPLES:\n\
        \x20 featgen new lib/features wallet\n\
        \x20 featgen new                      # prompts for both values\n\
        \x20 featgen tree wallet --format list\n\
        \x20 featgen completions bash > /usr/share/bash-completion/completions/featgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new feature module.
    #[command(
        visible_alias = "n",
        about = "Create a new feature",
        after_help = "EXAMPLES:\n\
            \x20 featgen new lib/features wallet\n\
            \x20 featgen new lib/features wallet --dry-run\n\
            \x20 featgen new lib/features My-Feature --permissive"
    )]
    New(NewArgs),

    /// Show the structure a feature would get.
    #[command(
        visible_alias = "t",
        about = "Print the feature structure",
        after_help = "EXAMPLES:\n\
            \x20 featgen tree\n\
            \x20 featgen tree wallet\n\
            \x20 featgen tree wallet --format json"
    )]
    Tree(TreeArgs),

    /// Write a default featgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 featgen init\n\
            \x20 featgen init --force\n\
            \x20 featgen --config ./featgen.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 featgen completions bash > ~/.local/share/bash-completion/completions/featgen\n\
            \x20 featgen completions zsh  > ~/.zfunc/_featgen\n\
            \x20 featgen completions fish > ~/.config/fish/completions/featgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the featgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 featgen config get naming.strict\n\
            \x20 featgen config list\n\
            \x20 featgen config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `featgen new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Existing directory the feature folder is created in.
    #[arg(
        value_name = "BASE",
        help = "Base directory, usually lib/features (prompted if omitted)"
    )]
    pub base: Option<PathBuf>,

    /// Feature name; trimmed and lower-cased.
    #[arg(value_name = "FEATURE", help = "Feature name (prompted if omitted)")]
    pub feature: Option<String>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Only accept names matching `[a-z][a-z0-9_]*`.
    #[arg(long = "strict", conflicts_with = "permissive", help = "Reject names that are not valid Dart identifiers")]
    pub strict: bool,

    /// Accept any name as typed.
    #[arg(long = "permissive", help = "Use the name verbatim after trimming and lower-casing")]
    pub permissive: bool,
}

impl NewArgs {
    /// Name policy: explicit flag first, then `naming.strict` from config.
    pub fn strictness(&self, config: &AppConfig) -> NameStrictness {
        if self.strict {
            NameStrictness::Strict
        } else if self.permissive {
            NameStrictness::Permissive
        } else {
            NameStrictness::from_strict_flag(config.naming.strict)
        }
    }
}

// ── tree ──────────────────────────────────────────────────────────────────────

/// Arguments for `featgen tree`.
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Substitute this feature name; placeholders are shown when omitted.
    #[arg(value_name = "FEATURE", help = "Feature name to substitute")]
    pub feature: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "tree",
        help = "Output format"
    )]
    pub format: TreeFormat,
}

/// Output format for the `tree` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TreeFormat {
    /// Indented outline.
    Tree,
    /// One relative path per line.
    List,
    /// JSON document.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `featgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `featgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `featgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `naming.strict`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_with_positionals() {
        let cli = Cli::parse_from(["featgen", "new", "lib/features", "wallet", "--dry-run"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.base, Some(PathBuf::from("lib/features")));
        assert_eq!(args.feature.as_deref(), Some("wallet"));
        assert!(args.dry_run);
    }

    #[test]
    fn new_without_arguments_is_allowed() {
        let cli = Cli::parse_from(["featgen", "new"]);
        assert!(matches!(cli.command, Commands::New(NewArgs { base: None, feature: None, .. })));
    }

    #[test]
    fn strict_and_permissive_conflict() {
        let result = Cli::try_parse_from(["featgen", "new", "a", "b", "--strict", "--permissive"]);
        assert!(result.is_err());
    }

    #[test]
    fn strictness_prefers_flags_over_config() {
        let mut config = AppConfig::default();
        config.naming.strict = true;

        let cli = Cli::parse_from(["featgen", "new", "a", "b", "--permissive"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.strictness(&config), NameStrictness::Permissive);

        config.naming.strict = false;
        let cli = Cli::parse_from(["featgen", "new", "a", "b"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.strictness(&config), NameStrictness::Permissive);
    }

    #[test]
    fn tree_format_defaults_to_tree() {
        let cli = Cli::parse_from(["featgen", "tree"]);
        let Commands::Tree(args) = cli.command else {
            panic!("expected Tree command");
        };
        assert_eq!(args.format, TreeFormat::Tree);
        assert!(args.feature.is_none());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["featgen", "--quiet", "--verbose", "tree"]);
        assert!(result.is_err());
    }
}
