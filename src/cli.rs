//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "casegate",
    version,
    about = "Naming-convention gate for C-family sources",
    long_about = "casegate — a CI gate that scans C-family sources for naming-convention violations and proposes mechanical renames.\n\nConfiguration precedence: CLI > casegate.toml > defaults.",
    after_help = "Examples:\n  casegate check\n  casegate check src/widget.cpp src/widget.h\n  casegate check --output github\n  casegate check --repo-root ../proj --suggestions fixes.txt",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current casegate version.")]
    Version,
    /// Check naming conventions
    #[command(
        about = "Run the naming check",
        long_about = "Collect declared symbols across the file set, then check every detected declaration against its category's naming policy. Exits 1 when violations are found.",
        after_help = "Examples:\n  casegate check\n  casegate check --output json\n  casegate check include/*.h --entry-point WinMain"
    )]
    Check {
        #[arg(help = "Explicit files to analyze (default: recursive search from repo root)")]
        paths: Vec<String>,
        #[arg(long, help = "Repository root (default: walk up from current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json|github (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Suggestions artifact path, relative to repo root")]
        suggestions: Option<String>,
        #[arg(long, help = "Entry-point function name exempt from checks (default: main)")]
        entry_point: Option<String>,
    },
}
