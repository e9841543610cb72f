use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kebabify")]
#[command(version)]
#[command(about = "Recursively rename files and directories to kebab-case")]
#[command(long_about = "A CLI tool that walks a directory tree and renames files and/or directories to lowercase, hyphen-separated names, keeping file extensions and leading-dot hidden markers. Every change is listed and confirmed before anything is renamed.")]
pub struct Cli {
    #[arg(help = "Target directory (defaults to current directory)")]
    pub target: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
