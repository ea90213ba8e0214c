//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `FEATGEN_<SECTION>__<KEY>` (e.g. `FEATGEN_NAMING__STRICT=false`)
//! 3. Config file: `--config FILE` (must exist) or the platform default (optional)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "FEATGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Feature-name policy.
    pub naming: NamingConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Defaults for `featgen new`.
    pub scaffold: ScaffoldConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Reject names that are not `[a-z][a-z0-9_]*`.
    pub strict: bool,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self { strict: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Suggested answer for the base-path prompt.
    pub base_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from file and environment over the defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; when given
    /// it must exist. Otherwise the platform default path is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(true),
            None => File::from(Self::config_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        Self::from_sources(file, Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn from_sources(
        file: File<config::FileSourceFile, FileFormat>,
        env: Environment,
    ) -> anyhow::Result<Self> {
        Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.featgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "featgen", "featgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".featgen.toml"))
    }

    /// The file `init` and `config path` refer to.
    pub fn active_path(explicit: Option<&Path>) -> PathBuf {
        explicit.map_or_else(Self::config_path, Path::to_path_buf)
    }

    /// Look up a single dotted key as display text.
    ///
    /// Returns `None` for unknown keys. Unset optional keys print as an
    /// empty string.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "naming.strict" => self.naming.strict.to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            "scaffold.base_dir" => self
                .scaffold
                .base_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            _ => return None,
        };
        Some(value)
    }

    /// Every key accepted by [`Self::get`].
    pub const KEYS: [&'static str; 4] = [
        "naming.strict",
        "output.no_color",
        "output.format",
        "scaffold.base_dir",
    ];
}
