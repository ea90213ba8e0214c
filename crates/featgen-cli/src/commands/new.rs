//! Implementation of the `featgen new` command.
//!
//! Responsibility: collect the base path and feature name (from arguments
//! or prompts), call the core scaffold service, and display results. No
//! business logic lives here.

use std::path::PathBuf;

use tracing::{debug, instrument};

use featgen_adapters::{FEATURE_TREE, LocalFilesystem, SimpleRenderer};
use featgen_core::{
    application::{ApplicationError, ScaffoldReport, ScaffoldService},
    domain::{FeatureName, ProjectStructure},
    error::FeatgenError,
};

use crate::{
    cli::{NewArgs, OutputFormat},
    commands::tree,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

const BASE_PROMPT: &str = "Base path (the 'features' folder under 'lib')";
const FEATURE_PROMPT: &str = "Name of the new feature";

/// Execute the `featgen new` command.
///
/// Dispatch sequence:
/// 1. Resolve the base path and raw feature name, prompting for missing ones
/// 2. Normalise and check the name under the selected strictness
/// 3. `--dry-run`: plan and print, write nothing
/// 4. Otherwise scaffold and report the created folder
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: NewArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let strictness = args.strictness(config);

    let base = match args.base {
        Some(base) => base,
        None => ask_base(config)?,
    };
    let raw_name = match args.feature {
        Some(name) => name,
        None => prompt::ask(FEATURE_PROMPT, None)?,
    };

    let feature = FeatureName::parse(&raw_name, strictness).map_err(FeatgenError::from)?;
    debug!(feature = %feature, base = %base.display(), %strictness, "Arguments resolved");

    let service = ScaffoldService::new(
        &FEATURE_TREE,
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    if args.dry_run {
        return match service.plan(&feature, &base) {
            Ok(structure) => show_plan(&structure, output),
            Err(err) => report_missing_base(err, output),
        };
    }

    match service.scaffold(&feature, &base) {
        Ok(report) => show_report(&feature, &report, output),
        Err(err) => report_missing_base(err, output),
    }
}

/// A missing base directory is reported on stderr but the run still succeeds.
/// Every other failure propagates.
fn report_missing_base(err: FeatgenError, output: &OutputManager) -> CliResult<()> {
    match err {
        FeatgenError::Application(missing @ ApplicationError::BaseNotFound { .. }) => {
            debug!(error = %missing, "Nothing scaffolded");
            output.error(&missing.to_string())?;
            Ok(())
        }
        other => Err(other.into()),
    }
}

fn ask_base(config: &AppConfig) -> CliResult<PathBuf> {
    let default = config
        .scaffold
        .base_dir
        .as_ref()
        .map(|p| p.display().to_string());

    let answer = prompt::ask(BASE_PROMPT, default.as_deref())?;
    if answer.is_empty() {
        return Err(CliError::InvalidInput {
            message: "base path cannot be empty".into(),
            source: None,
        });
    }
    Ok(PathBuf::from(answer))
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(structure: &ProjectStructure, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(structure);
    }

    output.header(&format!(
        "Dry run: would create {}/",
        structure.root().display()
    ))?;
    for line in tree::outline(structure, 1) {
        output.print(&line)?;
    }
    output.info(&format!(
        "{} directories, {} files. Nothing was written.",
        structure.directories().count(),
        structure.files().count(),
    ))?;
    Ok(())
}

fn show_report(
    feature: &FeatureName,
    report: &ScaffoldReport,
    output: &OutputManager,
) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(report);
    }

    output.success(&format!(
        "Feature '{}' created at {}",
        feature,
        report.root.display()
    ))?;
    output.print(&format!(
        "  {} directories, {} files",
        report.directories, report.files
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::cli::GlobalArgs;

    fn quiet_output() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn missing_base_is_reported_not_failed() {
        let err = ApplicationError::BaseNotFound {
            path: PathBuf::from("lib/features"),
        };
        assert!(report_missing_base(err.into(), &quiet_output()).is_ok());
    }

    #[test]
    fn other_failures_propagate() {
        let err = ApplicationError::BaseNotDirectory {
            path: PathBuf::from("pubspec.yaml"),
        };
        let cli = report_missing_base(err.into(), &quiet_output()).unwrap_err();
        assert_eq!(cli.exit_code(), 2);
    }
}
