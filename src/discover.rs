//! Input file resolution and cached source loading.
//!
//! Two entry modes: explicit paths (checked in argument order, missing ones
//! dropped) or a recursive extension-filtered walk of the repo root, sorted
//! for a deterministic order. Sources are loaded once and cached for both
//! passes; a file that fails to read (I/O or non-UTF-8) is skipped whole,
//! contributing neither symbols nor violations.

use crate::models::table::SourceFile;
use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the ordered set of files to analyze.
pub fn resolve_files(root: &Path, explicit: &[String], extensions: &[String]) -> Vec<PathBuf> {
    if !explicit.is_empty() {
        return explicit
            .iter()
            .map(PathBuf::from)
            .filter(|p| p.is_file())
            .collect();
    }
    let mut found: Vec<PathBuf> = Vec::new();
    for ext in extensions {
        let pattern = root
            .join(format!("**/*.{}", ext))
            .to_string_lossy()
            .to_string();
        if let Ok(entries) = glob(&pattern) {
            for entry in entries.flatten() {
                if entry.is_file() {
                    found.push(entry);
                }
            }
        }
    }
    found.sort();
    found.dedup();
    found
}

/// Display path for diagnostics: repo-relative when the file sits under the
/// root, otherwise the path as given.
pub fn display_path(path: &Path, root: &Path) -> String {
    match pathdiff::diff_paths(path, root) {
        Some(rel) if !rel.starts_with("..") => rel.to_string_lossy().to_string(),
        _ => path.to_string_lossy().to_string(),
    }
}

/// Read every file once, caching its lines for both passes.
///
/// Returns the loaded sources in input order plus one note per skipped file.
/// Read failures are isolated; they never abort the run.
pub fn load_sources(paths: &[PathBuf], root: &Path) -> (Vec<SourceFile>, Vec<String>) {
    let mut sources: Vec<SourceFile> = Vec::new();
    let mut errors: Vec<String> = Vec::new();
    for path in paths {
        let display = display_path(path, root);
        match fs::read_to_string(path) {
            Ok(text) => sources.push(SourceFile {
                path: display,
                lines: text.lines().map(String::from).collect(),
            }),
            Err(e) => errors.push(format!("skipped {}: {}", display, e)),
        }
    }
    (sources, errors)
}
