//! Line-oriented declaration detectors shared by both passes.
//!
//! Detection is heuristic: one line at a time, no parser, no AST. The same
//! `Scanner` drives symbol collection and naming checks so both passes see
//! identical declarations. Per line, the first satisfied branch wins:
//! class > class-close > enum > function > variable. Declarations spanning
//! multiple lines are never detected, and a class that opens and closes on
//! the same line corrupts the class-body state for the rest of the file
//! (documented limitation of the `};` suffix heuristic).

use regex::Regex;

/// Compiled declaration patterns, built once per run.
pub struct Detectors {
    class_decl: Regex,
    enum_decl: Regex,
    func_decl: Regex,
    var_decl: Regex,
}

impl Detectors {
    pub fn new() -> Self {
        Detectors {
            class_decl: Regex::new(r"\bclass\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap(),
            enum_decl: Regex::new(r"\benum\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap(),
            func_decl: Regex::new(r"\b[A-Za-z_][A-Za-z0-9_:<>]*\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(")
                .unwrap(),
            var_decl: Regex::new(
                r"^(?:static\s+)?(?:const\s+)?(?:inline\s+)?[A-Za-z_][A-Za-z0-9_:<>\s,\*&]*\s+([A-Za-z_][A-Za-z0-9_]*)\s*(?:=|;|\))",
            )
            .unwrap(),
        }
    }
}

impl Default for Detectors {
    fn default() -> Self {
        Self::new()
    }
}

/// A declaration detected on a single line.
#[derive(Debug, PartialEq, Eq)]
pub enum Decl {
    Class(String),
    Enum(String),
    Function(String),
    Variable {
        name: String,
        is_static: bool,
        in_class: bool,
    },
}

/// Per-file scan state: tracks whether the cursor is inside a class body.
///
/// No nesting support; re-entering a second class before the first closes
/// leaves the state attached to the outer scan.
pub struct Scanner<'d> {
    detectors: &'d Detectors,
    in_class: bool,
}

impl<'d> Scanner<'d> {
    pub fn new(detectors: &'d Detectors) -> Self {
        Scanner {
            detectors,
            in_class: false,
        }
    }

    /// Scan one raw line, returning at most one declaration.
    ///
    /// Updates the class-body state as a side effect; a class declaration or
    /// a `};` closer consumes the line entirely.
    pub fn scan_line(&mut self, raw: &str) -> Option<Decl> {
        let s = raw.trim();

        if let Some(c) = self.detectors.class_decl.captures(s) {
            self.in_class = true;
            return Some(Decl::Class(c[1].to_string()));
        }
        if self.in_class && s.ends_with("};") {
            self.in_class = false;
            return None;
        }
        if let Some(c) = self.detectors.enum_decl.captures(s) {
            return Some(Decl::Enum(c[1].to_string()));
        }
        if let Some(c) = self.detectors.func_decl.captures(s) {
            return Some(Decl::Function(c[1].to_string()));
        }
        // Parenthesized lines are function signatures as far as the variable
        // heuristic is concerned, never variable declarations.
        if !s.contains('(') && !s.contains(')') {
            if let Some(c) = self.detectors.var_decl.captures(s) {
                return Some(Decl::Variable {
                    name: c[1].to_string(),
                    is_static: s.contains("static"),
                    in_class: self.in_class,
                });
            }
        }
        None
    }
}
