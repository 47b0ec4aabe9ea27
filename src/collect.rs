//! Symbol collection pass: build the project symbol table.

use crate::models::table::{SourceFile, SymbolTable};
use crate::scan::{Decl, Detectors, Scanner};

/// Collect declared symbols from every cached source, in order.
///
/// Variables are recorded only when declared inside a class body, split into
/// static and non-static member sets. The entry-point name is never
/// collected as a function, so it can never be flagged downstream.
pub fn collect_symbols(
    sources: &[SourceFile],
    detectors: &Detectors,
    entry_point: &str,
) -> SymbolTable {
    let mut table = SymbolTable::default();
    for src in sources {
        let mut scanner = Scanner::new(detectors);
        for line in &src.lines {
            match scanner.scan_line(line) {
                Some(Decl::Class(name)) => {
                    table.classes.insert(name);
                }
                Some(Decl::Enum(name)) => {
                    table.enums.insert(name);
                }
                Some(Decl::Function(name)) => {
                    if name != entry_point {
                        table.functions.insert(name);
                    }
                }
                Some(Decl::Variable {
                    name,
                    is_static,
                    in_class: true,
                }) => {
                    if is_static {
                        table.static_members.insert(name);
                    } else {
                        table.members.insert(name);
                    }
                }
                _ => {}
            }
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src(path: &str, text: &str) -> SourceFile {
        SourceFile {
            path: path.to_string(),
            lines: text.lines().map(String::from).collect(),
        }
    }

    #[test]
    fn test_function_collected_outside_class() {
        let det = Detectors::new();
        let table = collect_symbols(&[src("a.cpp", "int my_function() {\n}\n")], &det, "main");
        assert!(table.functions.contains("my_function"));
        assert!(table.members.is_empty());
    }

    #[test]
    fn test_entry_point_never_collected() {
        let det = Detectors::new();
        let table = collect_symbols(&[src("a.cpp", "int main() {\n}\n")], &det, "main");
        assert!(!table.functions.contains("main"));
        // Exemption follows the configured name, not a hardcoded one
        let table = collect_symbols(&[src("a.cpp", "int WinMain() {\n}\n")], &det, "WinMain");
        assert!(!table.functions.contains("WinMain"));
    }

    #[test]
    fn test_members_split_by_static_keyword() {
        let det = Detectors::new();
        let text = "class A {\n  int _data;\n  static int count;\n};\n";
        let table = collect_symbols(&[src("a.h", text)], &det, "main");
        assert!(table.members.contains("_data"));
        assert!(table.static_members.contains("count"));
        assert!(!table.members.contains("count"));
    }

    #[test]
    fn test_variables_outside_class_not_collected() {
        let det = Detectors::new();
        let table = collect_symbols(&[src("a.cpp", "int _global;\n")], &det, "main");
        assert!(table.members.is_empty());
        assert!(table.static_members.is_empty());
    }

    #[test]
    fn test_table_spans_files() {
        let det = Detectors::new();
        let table = collect_symbols(
            &[
                src("a.h", "class widget {\n};\n"),
                src("b.h", "enum color_kind {\n};\n"),
            ],
            &det,
            "main",
        );
        assert!(table.classes.contains("widget"));
        assert!(table.enums.contains("color_kind"));
    }
}
