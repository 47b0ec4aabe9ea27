//! Output rendering for the check command.
//!
//! Supports `human` (default), `github` (CI workflow annotations), and
//! `json` outputs, plus the pipe-delimited suggestions artifact consumed by
//! autofix tooling. The JSON form is composed by a pure function so tests
//! can assert on its shape.

use crate::models::CheckResult;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::fs;
use std::path::Path;

fn use_colors(output: &str) -> bool {
    output != "json" && output != "github" && std::env::var_os("NO_COLOR").is_none()
}

/// Print check results in the requested format. Skip notes go to stderr so
/// machine-readable stdout stays clean.
pub fn print_check(res: &CheckResult, output: &str, errors: &[String]) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_check_json(res, errors)).unwrap()
        ),
        "github" => {
            for v in &res.violations {
                println!("::warning file={},line={}::{}", v.file, v.line, v.message);
            }
            for e in errors {
                eprintln!("{} {}", crate::utils::note_prefix(), e);
            }
        }
        _ => {
            let color = use_colors(output);
            for v in &res.violations {
                let icon = if color {
                    "✖".red().to_string()
                } else {
                    "✖".to_string()
                };
                let loc = format!("{}:{}", v.file, v.line);
                let loc = if color { loc.bold().to_string() } else { loc };
                println!("{} {} - {}", icon, loc, v.message);
            }
            for e in errors {
                eprintln!("{} {}", crate::utils::note_prefix(), e);
            }
            if res.violations.is_empty() {
                let ok = "No naming violations found.";
                if color {
                    println!("{}", ok.green().bold());
                } else {
                    println!("{}", ok);
                }
            } else {
                let summary = format!(
                    "— Summary — violations={} fixable={} files={} skipped={}",
                    res.summary.violations,
                    res.summary.fixable,
                    res.summary.files,
                    res.summary.skipped
                );
                if color {
                    println!("{}", summary.bold());
                } else {
                    println!("{}", summary);
                }
            }
        }
    }
}

/// Compose the check JSON object (pure) for testing/snapshot purposes.
pub fn compose_check_json(res: &CheckResult, errors: &[String]) -> JsonVal {
    json!({
        "violations": serde_json::to_value(&res.violations).unwrap(),
        "summary": serde_json::to_value(&res.summary).unwrap(),
        "skipped": errors,
    })
}

/// Render the suggestions artifact: `path|line|rewritten_line`, one record
/// per violation that carries a rewritten line.
pub fn compose_suggestions(res: &CheckResult) -> String {
    let mut out = String::new();
    for v in &res.violations {
        if let Some(rewritten) = v.rewritten.as_deref() {
            out.push_str(&format!("{}|{}|{}\n", v.file, v.line, rewritten));
        }
    }
    out
}

/// Write the suggestions artifact when there is anything to autofix.
///
/// Absence of the file is equivalent to "nothing to fix"; an empty render is
/// never written.
pub fn write_suggestions(res: &CheckResult, path: &Path) -> std::io::Result<bool> {
    let body = compose_suggestions(res);
    if body.is_empty() {
        return Ok(false);
    }
    fs::write(path, body)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Summary, SymbolCategory, Violation};

    fn sample() -> CheckResult {
        CheckResult {
            violations: vec![
                Violation {
                    file: "a.cpp".into(),
                    line: 3,
                    name: "my_function".into(),
                    category: SymbolCategory::Function,
                    suggested: Some("MyFunction".into()),
                    rewritten: Some("int MyFunction() {".into()),
                    message: "function `my_function` should be `MyFunction`".into(),
                },
                Violation {
                    file: "b.h".into(),
                    line: 1,
                    name: "color_kind".into(),
                    category: SymbolCategory::Enum,
                    suggested: None,
                    rewritten: None,
                    message: "enum `color_kind` does not match naming policy (no mechanical fix)"
                        .into(),
                },
            ],
            summary: Summary {
                violations: 2,
                fixable: 1,
                files: 2,
                skipped: 0,
            },
        }
    }

    #[test]
    fn test_compose_check_json_shape() {
        let out = compose_check_json(&sample(), &["skipped c.cpp: bad encoding".to_string()]);
        assert_eq!(out["summary"]["violations"], 2);
        assert_eq!(out["summary"]["fixable"], 1);
        assert_eq!(out["violations"][0]["file"], "a.cpp");
        assert_eq!(out["violations"][0]["suggested"], "MyFunction");
        assert_eq!(out["violations"][1]["category"], "enum");
        assert!(out["violations"][1]["suggested"].is_null());
        assert_eq!(out["skipped"][0], "skipped c.cpp: bad encoding");
    }

    #[test]
    fn test_compose_suggestions_only_rewritable_rows() {
        let body = compose_suggestions(&sample());
        assert_eq!(body, "a.cpp|3|int MyFunction() {\n");
    }

    #[test]
    fn test_write_suggestions_skips_empty_render() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lint_suggestions.txt");
        let empty = CheckResult {
            violations: vec![],
            summary: Summary {
                violations: 0,
                fixable: 0,
                files: 0,
                skipped: 0,
            },
        };
        assert!(!write_suggestions(&empty, &path).unwrap());
        assert!(!path.exists());

        assert!(write_suggestions(&sample(), &path).unwrap());
        let body = fs::read_to_string(&path).unwrap();
        assert_eq!(body, "a.cpp|3|int MyFunction() {\n");
    }
}
