use std::fs;
use tracing::{debug, info};

use crate::plan::RenameOperation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed,
    SkippedCollision,
    Failed { cause: String },
}

#[derive(Debug, Clone)]
pub struct RenameReport {
    pub operation: RenameOperation,
    pub outcome: RenameOutcome,
}

#[derive(Debug, Default)]
pub struct ExecutionSummary {
    pub reports: Vec<RenameReport>,
    pub renamed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl ExecutionSummary {
    fn record(&mut self, report: RenameReport) {
        match report.outcome {
            RenameOutcome::Renamed => self.renamed += 1,
            RenameOutcome::SkippedCollision => self.skipped += 1,
            RenameOutcome::Failed { .. } => self.failed += 1,
        }
        self.reports.push(report);
    }
}

/// Applies `operations` in order. A collision or failure only affects its own
/// operation; nothing is retried or rolled back.
pub fn execute_operations<F>(
    operations: Vec<RenameOperation>,
    mut on_report: F,
) -> ExecutionSummary
where
    F: FnMut(&RenameReport),
{
    info!("Executing {} rename operations", operations.len());

    let mut summary = ExecutionSummary::default();
    for operation in operations {
        let outcome = apply_operation(&operation);
        let report = RenameReport { operation, outcome };
        on_report(&report);
        summary.record(report);
    }

    info!(
        "Execution complete: {} renamed, {} skipped, {} failed",
        summary.renamed, summary.skipped, summary.failed
    );
    summary
}

fn apply_operation(operation: &RenameOperation) -> RenameOutcome {
    let source = operation.source();
    let destination = operation.destination();

    // symlink_metadata so that a dangling link at the destination still counts
    if fs::symlink_metadata(destination).is_ok() {
        debug!("Collision: {:?} already exists", destination);
        return RenameOutcome::SkippedCollision;
    }

    match fs::rename(source, destination) {
        Ok(()) => {
            debug!("Renamed {:?} -> {:?}", source, destination);
            RenameOutcome::Renamed
        }
        Err(e) => {
            debug!("Failed to rename {:?}: {}", source, e);
            RenameOutcome::Failed { cause: e.to_string() }
        }
    }
}
