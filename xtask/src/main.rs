use std::process;

use anyhow::Result;
use clap::{ArgMatches, Command};

const BIN_NAME: &str = "kebabify";

fn main() -> Result<()> {
    let args = clap::command!()
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("install").about("Install kebabify binary locally"))
        .subcommand(
            Command::new("run")
                .about("Build and run kebabify with arguments")
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .arg(clap::Arg::new("args")
                    .help("Arguments to pass to kebabify")
                    .action(clap::ArgAction::Append)
                    .num_args(0..))
        )
        .subcommand(
            Command::new("test")
                .about("Test Operations")
                .subcommand(Command::new("all").about("Run every test suite in the workspace"))
                .subcommand(Command::new("core").about("Run tests for kebabify-core"))
                .subcommand(Command::new("bin").about("Run tests for kebabify-bin"))
                .subcommand(Command::new("integration").about("Run integration tests"))
        )
        .get_matches();

    match args.subcommand() {
        Some(("install", args)) => handle_install_command(args),
        Some(("run", args)) => handle_run_command(args),
        Some(("test", args)) => handle_test_commands(args),
        Some((command, _)) => anyhow::bail!("Unexpected command: {command}"),
        None => anyhow::bail!("Expected subcommand"),
    }
}

fn handle_install_command(_args: &ArgMatches) -> Result<()> {
    println!("Installing {BIN_NAME}...");
    cargo(&["install", "--path", "crates/kebabify-bin"], "Failed to install kebabify")?;
    println!("✓ {BIN_NAME} installed successfully");
    Ok(())
}

fn handle_run_command(args: &ArgMatches) -> Result<()> {
    let run_args: Vec<String> = args.get_many::<String>("args")
        .map_or(Vec::new(), |vals| vals.cloned().collect());

    let mut cargo_args = vec!["run", "--bin", BIN_NAME, "--"];
    cargo_args.extend(run_args.iter().map(String::as_str));

    cargo(&cargo_args, "Failed to run kebabify")
}

fn handle_test_commands(args: &ArgMatches) -> Result<()> {
    match args.subcommand() {
        Some(("all", _args)) => test_all(),
        Some(("core", _args)) => test_core(),
        Some(("bin", _args)) => test_bin(),
        Some(("integration", _args)) => test_integration(),
        _ => {
            println!("Available test commands:");
            println!("  all          - Run every test suite in the workspace");
            println!("  core         - Run tests for kebabify-core");
            println!("  bin          - Run tests for kebabify-bin");
            println!("  integration  - Run integration tests");
            Ok(())
        }
    }
}

fn test_all() -> Result<()> {
    let suites: [(&str, fn() -> Result<()>); 4] = [
        ("kebabify-core", test_core),
        ("kebabify-bin", test_bin),
        ("documentation", test_docs),
        ("integration", test_integration),
    ];

    let mut failures = Vec::new();
    for (name, suite) in suites {
        println!("🧪 Running {name} tests...");
        match suite() {
            Ok(()) => println!("✅ {name} tests passed\n"),
            Err(e) => {
                println!("❌ {name} tests failed: {e}\n");
                failures.push(name);
            }
        }
    }

    if failures.is_empty() {
        println!("🎉 All tests passed successfully!");
        Ok(())
    } else {
        anyhow::bail!("Test suite failed: {}", failures.join(", "))
    }
}

fn test_core() -> Result<()> {
    cargo(&["test", "--package", "kebabify-core"], "Core tests failed")
}

fn test_bin() -> Result<()> {
    cargo(&["test", "--package", "kebabify-bin"], "Binary tests failed")
}

fn test_docs() -> Result<()> {
    cargo(&["test", "--doc", "--package", "kebabify-core"], "Documentation tests failed")
}

fn test_integration() -> Result<()> {
    cargo(
        &["test", "--package", "kebabify-core", "--test", "rename_tree"],
        "Tree renaming integration tests failed",
    )?;
    cargo(&["run", "--bin", BIN_NAME, "--", "--help"], "CLI help command failed")?;
    cargo(&["run", "--bin", BIN_NAME, "--", "--version"], "CLI version command failed")
}

fn cargo(args: &[&str], failure: &str) -> Result<()> {
    let status = process::Command::new("cargo").args(args).status()?;

    if !status.success() {
        anyhow::bail!("{failure}");
    }
    Ok(())
}
