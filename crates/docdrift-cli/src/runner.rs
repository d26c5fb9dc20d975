//! Drives scanner output through the front end and the decision engine.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use docdrift_core::{check, CheckConfig};

use crate::errors::ParseError;
use crate::frontend::{FilePosition, GoFrontend};

/// A diagnostic bound to a file position, with any suggested fix translated
/// into absolute byte offsets within that file.
#[derive(Debug, Clone, Serialize)]
pub struct FileDiagnostic {
    pub position: FilePosition,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<FileEdit>,
}

/// An in-place replacement within the file named by the position.
#[derive(Debug, Clone, Serialize)]
pub struct FileEdit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Analyzes every file in parallel and returns the merged diagnostics in
/// (path, line, column) order. Unreadable or unparsable files are logged
/// and skipped; they never abort the run.
pub fn run(files: &[PathBuf], config: &CheckConfig) -> Vec<FileDiagnostic> {
    let mut diagnostics: Vec<FileDiagnostic> = files
        .par_iter()
        .flat_map_iter(|path| match analyze_file(path, config) {
            Ok(diags) => diags,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping file");
                Vec::new()
            }
        })
        .collect();
    diagnostics.sort_by(|a, b| a.position.cmp(&b.position));
    diagnostics
}

/// Runs the engine over every documented declaration of one file.
pub fn analyze_file(path: &Path, config: &CheckConfig) -> Result<Vec<FileDiagnostic>, ParseError> {
    let source = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut frontend = GoFrontend::new()?;
    let records = frontend.declarations(path, &source)?;

    let mut out = Vec::new();
    for record in &records {
        if let Some(diag) = check(record, config) {
            let fix = diag.replacement.map(|rep| FileEdit {
                start: record.doc_offset + rep.span.start,
                end: record.doc_offset + rep.span.end,
                text: rep.text,
            });
            out.push(FileDiagnostic {
                position: diag.position,
                message: diag.message,
                fix,
            });
        }
    }
    Ok(out)
}
