//! casegate CLI binary entry point.
//! Delegates to modules for discovery, collection, and checking, then prints
//! results and sets the process exit code.

mod check;
mod cli;
mod collect;
mod config;
mod discover;
mod models;
mod output;
mod scan;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check {
            paths,
            repo_root,
            output,
            suggestions,
            entry_point,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                output.as_deref(),
                suggestions.as_deref(),
                entry_point.as_deref(),
            );
            if !matches!(eff.output.as_str(), "human" | "json" | "github") {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!(
                        "Unknown output mode: {} (expected human|json|github)",
                        eff.output
                    )
                );
                std::process::exit(2);
            }
            if config::load_config(&eff.repo_root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No casegate.toml found; using defaults."
                );
            }

            let files = discover::resolve_files(&eff.repo_root, &paths, &eff.extensions);
            if files.is_empty() {
                println!("No files to analyze.");
                return;
            }
            let (sources, errors) = discover::load_sources(&files, &eff.repo_root);

            let detectors = scan::Detectors::new();
            let table = collect::collect_symbols(&sources, &detectors, &eff.entry_point);
            let result = check::run_check(
                &sources,
                &table,
                &detectors,
                &eff.checks,
                &eff.entry_point,
                errors.len(),
            );
            output::print_check(&result, &eff.output, &errors);

            if !result.violations.is_empty() {
                let artifact = eff.repo_root.join(&eff.suggestions);
                if let Err(e) = output::write_suggestions(&result, &artifact) {
                    eprintln!(
                        "{} {}",
                        utils::error_prefix(),
                        format!("failed to write {}: {}", artifact.to_string_lossy(), e)
                    );
                }
                std::process::exit(1);
            }
        }
    }
}
