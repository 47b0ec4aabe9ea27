//! Symbol table and cached source file models.

use std::collections::BTreeSet;

/// A source file cached for both scan passes.
///
/// `path` is the display path (repo-relative when possible). Lines are read
/// once; caching keeps the collection and check passes in sync even if the
/// file changes or becomes unreadable mid-run.
pub struct SourceFile {
    pub path: String,
    pub lines: Vec<String>,
}

#[derive(Default, Debug)]
/// Project-wide symbol sets, one per collected category.
///
/// The table is flat and unqualified: a name reused in two files or two
/// classes is indistinguishable. Populated during collection, read-only
/// during checking.
pub struct SymbolTable {
    pub classes: BTreeSet<String>,
    pub enums: BTreeSet<String>,
    pub functions: BTreeSet<String>,
    pub static_members: BTreeSet<String>,
    pub members: BTreeSet<String>,
}
