//! Naming rule engine: classify detected declarations and derive fixes.
//!
//! The check pass re-scans the cached sources with the same detectors used
//! during collection, but never mutates the symbol table. A detected name is
//! only checked when it is present in the collected set for its category,
//! which guards against incidental text that merely looks like a declaration.
//! Per line the first satisfied branch wins; for variables the priority is
//! static member > non-static member > forbidden global/local prefix.
//!
//! Compliance and fixability are separate: a failing name always produces a
//! violation, and `suggested`/`rewritten` are absent when no differing fix is
//! derivable (enums carry no fixer by policy).

use crate::models::table::{SourceFile, SymbolTable};
use crate::models::{CheckResult, Summary, SymbolCategory, Violation};
use crate::scan::{Decl, Detectors, Scanner};
use regex::Regex;

#[derive(Debug, Clone)]
/// Category toggles selecting which checks run.
pub struct CheckToggles {
    pub classes: bool,
    pub enums: bool,
    pub functions: bool,
    pub statics: bool,
    pub members: bool,
    pub globals: bool,
}

impl Default for CheckToggles {
    fn default() -> Self {
        CheckToggles {
            classes: true,
            enums: true,
            functions: true,
            statics: true,
            members: true,
            globals: true,
        }
    }
}

/// Compiled naming patterns, one predicate per category.
struct Rules {
    pascal: Regex,
    member: Regex,
    static_member: Regex,
}

impl Rules {
    fn new() -> Self {
        Rules {
            pascal: Regex::new(r"^[A-Z][A-Za-z0-9]*$").unwrap(),
            member: Regex::new(r"^_[a-zA-Z0-9]+$").unwrap(),
            static_member: Regex::new(r"^s_[A-Za-z0-9]+$").unwrap(),
        }
    }
}

/// Run the check pass over the cached sources against a completed table.
///
/// Violations are ordered by input file order, then ascending line number.
/// `skipped` is the count of files dropped at load time; it flows into the
/// summary untouched.
pub fn run_check(
    sources: &[SourceFile],
    table: &SymbolTable,
    detectors: &Detectors,
    toggles: &CheckToggles,
    entry_point: &str,
    skipped: usize,
) -> CheckResult {
    let rules = Rules::new();
    let mut violations: Vec<Violation> = Vec::new();

    for src in sources {
        let mut scanner = Scanner::new(detectors);
        for (idx, line) in src.lines.iter().enumerate() {
            let hit: Option<(String, SymbolCategory)> = match scanner.scan_line(line) {
                Some(Decl::Class(name))
                    if toggles.classes
                        && table.classes.contains(&name)
                        && !rules.pascal.is_match(&name) =>
                {
                    Some((name, SymbolCategory::Class))
                }
                Some(Decl::Enum(name))
                    if toggles.enums
                        && table.enums.contains(&name)
                        && !rules.pascal.is_match(&name) =>
                {
                    Some((name, SymbolCategory::Enum))
                }
                Some(Decl::Function(name))
                    if toggles.functions
                        && name != entry_point
                        && table.functions.contains(&name)
                        && !rules.pascal.is_match(&name) =>
                {
                    Some((name, SymbolCategory::Function))
                }
                Some(Decl::Variable { name, .. }) => {
                    if table.static_members.contains(&name) {
                        (toggles.statics && !rules.static_member.is_match(&name))
                            .then(|| (name, SymbolCategory::StaticMember))
                    } else if table.members.contains(&name) {
                        (toggles.members && !rules.member.is_match(&name))
                            .then(|| (name, SymbolCategory::NonStaticMember))
                    } else if toggles.globals
                        && (name.starts_with("s_") || name.starts_with('_'))
                    {
                        Some((name, SymbolCategory::GlobalOrLocal))
                    } else {
                        None
                    }
                }
                _ => None,
            };

            if let Some((name, category)) = hit {
                let suggested = suggest_fix(&name, category);
                let rewritten = suggested
                    .as_deref()
                    .and_then(|good| rewrite_line(line, &name, good));
                let message = match suggested.as_deref() {
                    Some(good) => {
                        format!("{} `{}` should be `{}`", category.label(), name, good)
                    }
                    None => format!(
                        "{} `{}` does not match naming policy (no mechanical fix)",
                        category.label(),
                        name
                    ),
                };
                violations.push(Violation {
                    file: src.path.clone(),
                    line: idx + 1,
                    name,
                    category,
                    suggested,
                    rewritten,
                    message,
                });
            }
        }
    }

    let fixable = violations.iter().filter(|v| v.suggested.is_some()).count();
    let summary = Summary {
        violations: violations.len(),
        fixable,
        files: sources.len(),
        skipped,
    };
    CheckResult {
        violations,
        summary,
    }
}

/// Derive a compliant name for `name` in `category`.
///
/// Returns `None` when the category has no fixer (enums) or the fixer is a
/// no-op; the violation is still reported by the caller.
pub fn suggest_fix(name: &str, category: SymbolCategory) -> Option<String> {
    let fixed = match category {
        SymbolCategory::NonStaticMember => {
            if name.starts_with('_') {
                return None;
            }
            format!("_{}", name)
        }
        SymbolCategory::StaticMember => {
            if let Some(rest) = name.strip_prefix('_') {
                format!("s_{}", rest)
            } else if name.starts_with("s_") {
                return None;
            } else {
                format!("s_{}", name)
            }
        }
        SymbolCategory::Class | SymbolCategory::Function => pascal_case(name),
        SymbolCategory::GlobalOrLocal => name
            .strip_prefix("s_")
            .or_else(|| name.strip_prefix('_'))
            .unwrap_or(name)
            .to_string(),
        SymbolCategory::Enum => return None,
    };
    if fixed == name {
        None
    } else {
        Some(fixed)
    }
}

/// snake_case → PascalCase: uppercase the first letter of each non-empty
/// underscore-separated part, preserving the rest of each part.
fn pascal_case(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Replace whole-word occurrences of `name` on the original line, keeping
/// indentation and surrounding text intact.
fn rewrite_line(line: &str, name: &str, replacement: &str) -> Option<String> {
    let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(name))).ok()?;
    Some(pattern.replace_all(line, replacement).into_owned())
}
