//! Supporting helpers for stderr messaging.

use owo_colors::OwoColorize;

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for fatal usage errors.
pub fn error_prefix() -> String {
    if colors_enabled() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// Prefix for non-fatal notes (skipped files, missing config).
pub fn note_prefix() -> String {
    if colors_enabled() {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}
