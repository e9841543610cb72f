mod cli;
mod prompt;

use anyhow::Result;
use cli::Cli;
use kebabify_core::{KebabError, RunOutcome, SpecialNames};
use std::path::{Component, Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse_args();

    setup_logging(&cli)?;

    info!("Starting kebabify");

    let target = resolve_target(cli.target)?;
    let special_names = SpecialNames::default();
    debug!("Loaded {} special name mappings", special_names.len());

    let outcome = kebabify_core::rename_tree_interactive(
        &target,
        &special_names,
        || prompt::choose_scope(&target),
        prompt::show_plan_and_confirm,
        |report| println!("{}", prompt::format_report(report)),
    );

    match outcome {
        Ok(RunOutcome::NothingToRename) => println!("No items need renaming."),
        Ok(RunOutcome::Declined { .. }) => println!("Aborted."),
        Ok(RunOutcome::Completed(summary)) => prompt::print_summary(&summary),
        Err(e) => match e.downcast_ref::<KebabError>() {
            Some(KebabError::InvalidScopeChoice { .. }) => {
                println!("Invalid choice. Exiting.");
                return Ok(ExitCode::FAILURE);
            }
            Some(error) => {
                println!("Error: {}", error);
                return Ok(ExitCode::FAILURE);
            }
            None => return Err(e),
        },
    }

    info!("Kebabify completed");
    Ok(ExitCode::SUCCESS)
}

fn resolve_target(target: Option<PathBuf>) -> Result<PathBuf> {
    let target = match target {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    Ok(normalize_lexically(&std::path::absolute(target)?))
}

/// Folds `.` and `..` without touching the filesystem, so symlinks in the
/// target path are kept as given.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

fn setup_logging(cli: &Cli) -> Result<()> {
    let filter = if cli.quiet {
        EnvFilter::new("error")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact()
        )
        .with(filter)
        .init();

    Ok(())
}
