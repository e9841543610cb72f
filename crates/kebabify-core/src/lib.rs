use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod executor;
pub mod plan;
pub mod transformer;

pub use executor::{execute_operations, ExecutionSummary, RenameOutcome, RenameReport};
pub use plan::{collect_operations, RenameOperation, RenameScope};
pub use transformer::{EntryKind, KebabTransformer, SpecialNames};

#[derive(thiserror::Error, Debug)]
pub enum KebabError {
    #[error("Path {} does not exist.", path.display())]
    TargetNotFound { path: PathBuf },
    #[error("Path {} is not a directory.", path.display())]
    TargetNotDirectory { path: PathBuf },
    #[error("Invalid choice '{choice}'")]
    InvalidScopeChoice { choice: String },
}

#[derive(Debug)]
pub enum RunOutcome {
    NothingToRename,
    Declined { planned: usize },
    Completed(ExecutionSummary),
}

pub fn validate_target(target: &Path) -> Result<()> {
    if !target.exists() {
        return Err(KebabError::TargetNotFound { path: target.to_path_buf() }.into());
    }
    if !target.is_dir() {
        return Err(KebabError::TargetNotDirectory { path: target.to_path_buf() }.into());
    }
    Ok(())
}

pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Renames everything under `target` to kebab-case.
///
/// `choose_scope` supplies the raw scope answer (`d`, `f` or `b`), `confirm` is shown
/// the ordered plan and decides whether it runs, and `on_report` sees each
/// outcome as soon as its rename has been attempted.
pub fn rename_tree_interactive<S, C, R>(
    target: &Path,
    special_names: &SpecialNames,
    choose_scope: S,
    confirm: C,
    on_report: R,
) -> Result<RunOutcome>
where
    S: FnOnce() -> Result<String>,
    C: FnOnce(&Path, &[RenameOperation]) -> Result<bool>,
    R: FnMut(&RenameReport),
{
    validate_target(target)?;
    info!("Target directory: {:?}", target);

    let choice = choose_scope()?;
    let scope: RenameScope = choice.parse()?;
    debug!("Scope selected: {:?}", scope);

    let transformer = KebabTransformer::new(special_names)?;
    let operations = collect_operations(target, scope, &transformer)?;
    if operations.is_empty() {
        info!("No items need renaming");
        return Ok(RunOutcome::NothingToRename);
    }

    if !confirm(target, &operations)? {
        info!("Renaming declined");
        return Ok(RunOutcome::Declined { planned: operations.len() });
    }

    let summary = execute_operations(operations, on_report);
    Ok(RunOutcome::Completed(summary))
}
