//! Configuration discovery and effective settings resolution.
//!
//! casegate reads `casegate.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Defaults:
//! - `extensions`: `["c", "cc", "cpp", "cxx", "h", "hh", "hpp"]`
//! - `entry_point`: `main`
//! - `output`: `human`
//! - `suggestions`: `lint_suggestions.txt`
//! - `[checks].*`: all enabled
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::check::CheckToggles;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default extension set for C-family headers and sources.
pub const DEFAULT_EXTENSIONS: [&str; 7] = ["c", "cc", "cpp", "cxx", "h", "hh", "hpp"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Category toggle section under `[checks]`.
pub struct ChecksCfg {
    pub classes: Option<bool>,
    pub enums: Option<bool>,
    pub functions: Option<bool>,
    pub statics: Option<bool>,
    pub members: Option<bool>,
    pub globals: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `casegate.toml|yaml`.
pub struct CasegateConfig {
    pub extensions: Option<Vec<String>>,
    pub entry_point: Option<String>,
    pub output: Option<String>,
    pub suggestions: Option<String>,
    #[serde(default)]
    pub checks: Option<ChecksCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the check command.
pub struct Effective {
    pub repo_root: PathBuf,
    pub extensions: Vec<String>,
    pub entry_point: String,
    pub output: String,
    pub suggestions: String,
    pub checks: CheckToggles,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `casegate.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("casegate.toml").exists()
            || cur.join("casegate.yaml").exists()
            || cur.join("casegate.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `CasegateConfig` from `casegate.toml` or `casegate.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<CasegateConfig> {
    let toml_path = root.join("casegate.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: CasegateConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["casegate.yaml", "casegate.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: CasegateConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_suggestions: Option<&str>,
    cli_entry_point: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let extensions = cfg
        .extensions
        .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect());

    let entry_point = cli_entry_point
        .map(|s| s.to_string())
        .or(cfg.entry_point)
        .unwrap_or_else(|| "main".to_string());

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let suggestions = cli_suggestions
        .map(|s| s.to_string())
        .or(cfg.suggestions)
        .unwrap_or_else(|| "lint_suggestions.txt".to_string());

    let toggles = cfg.checks.unwrap_or_default();
    let defaults = CheckToggles::default();
    let checks = CheckToggles {
        classes: toggles.classes.unwrap_or(defaults.classes),
        enums: toggles.enums.unwrap_or(defaults.enums),
        functions: toggles.functions.unwrap_or(defaults.functions),
        statics: toggles.statics.unwrap_or(defaults.statics),
        members: toggles.members.unwrap_or(defaults.members),
        globals: toggles.globals.unwrap_or(defaults.globals),
    };

    Effective {
        repo_root,
        extensions,
        entry_point,
        output,
        suggestions,
        checks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("casegate.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
entry_point = "WinMain"
output = "json"
extensions = ["cpp", "hpp"]
[checks]
enums = false
    "#
        )
        .unwrap();

        // Resolve using explicit repo_root to avoid global CWD races
        let eff = resolve_effective(root.to_str(), None, None, None);
        assert_eq!(eff.entry_point, "WinMain");
        assert_eq!(eff.output, "json");
        assert_eq!(eff.extensions, vec!["cpp", "hpp"]);
        assert!(!eff.checks.enums);
        assert!(eff.checks.classes);
    }

    #[test]
    fn test_load_yaml_and_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("casegate.yaml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output: human
suggestions: out/fixes.txt
            "#
        )
        .unwrap();

        let eff = resolve_effective(root.to_str(), None, None, None);
        assert_eq!(eff.output, "human");
        assert_eq!(eff.suggestions, "out/fixes.txt");
        // Unspecified keys fall back to defaults
        assert_eq!(eff.entry_point, "main");
        assert_eq!(eff.extensions.len(), DEFAULT_EXTENSIONS.len());
        assert!(eff.checks.globals);
    }

    #[test]
    fn test_cli_precedence_over_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("casegate.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output = "json"
entry_point = "main"
            "#
        )
        .unwrap();

        let eff = resolve_effective(root.to_str(), Some("github"), Some("sugg.txt"), Some("wmain"));
        assert_eq!(eff.output, "github");
        assert_eq!(eff.suggestions, "sugg.txt");
        assert_eq!(eff.entry_point, "wmain");
    }

    #[test]
    fn test_no_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let eff = resolve_effective(dir.path().to_str(), None, None, None);
        assert_eq!(eff.output, "human");
        assert_eq!(eff.entry_point, "main");
        assert_eq!(eff.suggestions, "lint_suggestions.txt");
    }
}
