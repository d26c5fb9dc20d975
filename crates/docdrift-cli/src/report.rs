//! Diagnostic rendering.

use std::fmt::Write as _;

use crate::runner::FileDiagnostic;

/// One `path:line:col: message` line per diagnostic.
pub fn render_text(diagnostics: &[FileDiagnostic]) -> String {
    let mut out = String::new();
    for diagnostic in diagnostics {
        let _ = writeln!(out, "{}: {}", diagnostic.position, diagnostic.message);
    }
    out
}

pub fn render_json(diagnostics: &[FileDiagnostic]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(diagnostics)
}
