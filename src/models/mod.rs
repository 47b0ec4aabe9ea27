//! Shared data models for check output and the project symbol table.

pub mod table;

use serde::Serialize;

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
/// Category a detected declaration belongs to.
///
/// `GlobalOrLocal` is never collected; it is inferred by exclusion at check
/// time for names carrying a reserved member prefix.
pub enum SymbolCategory {
    Class,
    Enum,
    Function,
    StaticMember,
    NonStaticMember,
    GlobalOrLocal,
}

impl SymbolCategory {
    /// Human-readable label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            SymbolCategory::Class => "class",
            SymbolCategory::Enum => "enum",
            SymbolCategory::Function => "function",
            SymbolCategory::StaticMember => "static member",
            SymbolCategory::NonStaticMember => "member",
            SymbolCategory::GlobalOrLocal => "global/local",
        }
    }
}

#[derive(Serialize, Debug)]
/// A single naming violation with an optional mechanical fix.
///
/// `suggested` is absent when no differing fix is derivable (enums have no
/// fixer by policy; other fixers can be no-ops). `rewritten` is the original
/// line with only whole-word occurrences of `name` replaced, and is present
/// exactly when `suggested` is.
pub struct Violation {
    pub file: String,
    pub line: usize,
    pub name: String,
    pub category: SymbolCategory,
    pub suggested: Option<String>,
    pub rewritten: Option<String>,
    pub message: String,
}

#[derive(Serialize, Debug)]
/// Aggregated check summary used by printers.
pub struct Summary {
    pub violations: usize,
    pub fixable: usize,
    pub files: usize,
    pub skipped: usize,
}

#[derive(Serialize, Debug)]
/// Check results container: violations ordered by input file, then line.
pub struct CheckResult {
    pub violations: Vec<Violation>,
    pub summary: Summary,
}
