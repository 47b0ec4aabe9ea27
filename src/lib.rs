//! casegate core library.
//!
//! This crate exposes programmatic APIs for checking naming conventions in
//! C-family source text. Analysis is two sequential passes sharing a flat
//! project symbol table: collection, then checking.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `discover`: Input file resolution and cached source loading.
//! - `scan`: Shared line-oriented declaration detectors.
//! - `collect`: Symbol collection pass building the project table.
//! - `check`: Naming rule engine, fixers, and line rewriting.
//! - `models`: Violation/result structs and the symbol table.
//! - `output`: Human/GitHub/JSON printers and the suggestions artifact.
//! - `utils`: Supporting helpers.
pub mod check;
pub mod cli;
pub mod collect;
pub mod config;
pub mod discover;
pub mod models;
pub mod output;
pub mod scan;
pub mod utils;
