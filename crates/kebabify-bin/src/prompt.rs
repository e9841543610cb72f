use anyhow::Result;
use inquire::Text;
use kebabify_core::{is_affirmative, ExecutionSummary, RenameOperation, RenameOutcome, RenameReport};
use std::path::Path;

pub fn choose_scope(target: &Path) -> Result<String> {
    println!("Target directory: {}", target.display());
    println!("What would you like to rename recursively?");
    println!("[d] Directories only");
    println!("[f] Files only");
    println!("[b] Both");

    let choice = Text::new("Choice (d/f/b):").prompt()?;
    Ok(choice)
}

pub fn show_plan_and_confirm(target: &Path, operations: &[RenameOperation]) -> Result<bool> {
    println!("\nProposed changes ({} items):", operations.len());
    for operation in operations {
        println!("{}", format_plan_line(target, operation));
    }
    println!();

    let answer = Text::new("Proceed with renaming? (y/N):").prompt()?;
    if !is_affirmative(&answer) {
        return Ok(false);
    }

    println!("Renaming {} items...", operations.len());
    Ok(true)
}

pub fn format_plan_line(target: &Path, operation: &RenameOperation) -> String {
    format!(
        "  \x1b[31m{}\x1b[0m -> \x1b[32m{}\x1b[0m",
        operation.display_source(target),
        operation.new_name()
    )
}

pub fn format_report(report: &RenameReport) -> String {
    let source = report.operation.source().display();
    let destination = report.operation.destination().display();
    match &report.outcome {
        RenameOutcome::Renamed => format!("RENAMED: {} -> {}", source, destination),
        RenameOutcome::SkippedCollision => {
            format!("SKIP (Collision): {} already exists.", destination)
        }
        RenameOutcome::Failed { cause } => format!("ERROR renaming {}: {}", source, cause),
    }
}

pub fn print_summary(summary: &ExecutionSummary) {
    println!("\nRenaming complete!");
    println!("  Renamed: {}", summary.renamed);
    println!("  Skipped: {}", summary.skipped);
    println!("  Failed: {}", summary.failed);
}
